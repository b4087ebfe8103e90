//! # catalog
//!
//! Command-line front end for the product catalog.
//!
//! ## Commands
//!
//! - `list` - fetch and print every product
//! - `add` - create a product
//! - `update <id>` - change one or more fields of a product
//! - `delete <id>` - delete a product after confirmation (`--yes` skips the prompt)
//!
//! The service URL comes from `CATALOG_API_URL` or `--api-url`.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use catalog_store::config::{CatalogConfig, API_URL_ENV};
use catalog_store::lifecycle::{setup_tracing, CatalogSession};
use catalog_store::model::{parse_price, Category, Product, ProductDraft, ProductId, ProductPatch};
use catalog_store::product_store::ProductStore;

#[derive(Parser)]
#[command(name = "catalog", about = "Manage products in a remote catalog")]
struct Cli {
    /// Base URL of the product service (overrides CATALOG_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Accept non-success responses on list, update and delete.
    #[arg(long, global = true)]
    lenient_status: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print every product.
    List,
    /// Create a product.
    Add(AddArgs),
    /// Change one or more fields of a product.
    Update(UpdateArgs),
    /// Delete a product.
    Delete(DeleteArgs),
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,

    /// Price as entered, e.g. "19.99".
    #[arg(long)]
    price: String,

    /// One of Electronics, Clothing, Food, Books.
    #[arg(long, default_value_t = Category::default())]
    category: Category,

    #[arg(long, default_value = "")]
    description: String,
}

#[derive(Args)]
struct UpdateArgs {
    id: String,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    price: Option<String>,

    #[arg(long)]
    category: Option<Category>,

    #[arg(long)]
    description: Option<String>,
}

#[derive(Args)]
struct DeleteArgs {
    id: String,

    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.api_url {
        Some(url) => CatalogConfig::from_lookup(|name| {
            (name == API_URL_ENV)
                .then(|| url.clone())
                .or_else(|| std::env::var(name).ok())
        })?,
        None => CatalogConfig::from_env()?,
    };
    if cli.lenient_status {
        config = config.with_strict_status(false);
    }

    let session = CatalogSession::connect(config)?;
    let outcome = run(&session.store, cli.command).await;
    session.shutdown().await?;

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            warn!(error = %e, "Command failed");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(store: &ProductStore, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::List => {
            let state = store.ensure_loaded().await?;
            if state.products.is_empty() {
                println!("No products found");
            }
            for product in &state.products {
                print_product(product);
            }
        }
        Command::Add(args) => {
            let draft = ProductDraft::new(
                args.name,
                parse_price(&args.price)?,
                args.category,
                args.description,
            )?;
            match store.add_product(draft).await {
                Ok(product) => {
                    println!("Product added successfully");
                    print_product(&product);
                }
                Err(e) => return Err(failure("Failed to save product", e.into())),
            }
        }
        Command::Update(args) => {
            let mut patch = ProductPatch::default();
            if let Some(name) = args.name {
                patch = patch.name(name);
            }
            if let Some(price) = args.price {
                patch = patch.price(parse_price(&price)?);
            }
            if let Some(category) = args.category {
                patch = patch.category(category);
            }
            if let Some(description) = args.description {
                patch = patch.description(description);
            }
            match store.update_product(args.id, patch).await {
                Ok(product) => {
                    println!("Product updated successfully");
                    print_product(&product);
                }
                Err(e) => return Err(failure("Failed to save product", e.into())),
            }
        }
        Command::Delete(args) => {
            let id = ProductId::from(args.id);
            if !args.yes && !confirm_delete(store, &id).await? {
                println!("Cancelled");
                return Ok(());
            }
            match store.delete_product(id).await {
                Ok(()) => println!("Product deleted successfully"),
                Err(e) => return Err(failure("Failed to delete product", e.into())),
            }
        }
    }
    Ok(())
}

/// Asks on stdin before deleting. The product's name is shown when the store knows it.
async fn confirm_delete(
    store: &ProductStore,
    id: &ProductId,
) -> Result<bool, Box<dyn std::error::Error>> {
    let state = store.ensure_loaded().await?;
    let label = state
        .get(id)
        .map(|product| product.name.clone())
        .unwrap_or_else(|| id.to_string());

    println!("Are you sure you want to delete \"{label}\"? This action cannot be undone. [y/N]");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    let confirmed = matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes");
    info!(%id, confirmed, "Delete confirmation");
    Ok(confirmed)
}

/// Prefixes an operation's error with the message shown to the user.
fn failure(summary: &str, e: Box<dyn std::error::Error>) -> Box<dyn std::error::Error> {
    format!("{summary}: {e}").into()
}

fn print_product(product: &Product) {
    println!(
        "{id}  {name}  ${price:.2}  [{category}]",
        id = product.id,
        name = product.name,
        price = product.price,
        category = product.category,
    );
    if !product.description.is_empty() {
        println!("    {}", product.description);
    }
    if !product.created_at.is_empty() {
        println!("    created {}", product.created_at);
    }
}
