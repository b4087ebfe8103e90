//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); spans from
//! `#[instrument]` show inline instead.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup and shutdown of the store actor
//! - **Store operations**: every applied action, with its name
//! - **Remote calls**: status and body size of each response, rejections as warnings
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info catalog list
//!
//! # Full payloads and per-response details
//! RUST_LOG=debug catalog add --name Widget --price 9.99
//!
//! # Only the HTTP adapter
//! RUST_LOG=catalog_store::api=debug catalog list
//! ```
//!
//! With `RUST_LOG=info` a fetch reads:
//!
//! ```text
//! INFO fetch_products: Applied store="ProductsState" action="FetchPending"
//! INFO fetch_products: Fetched products count=2
//! INFO fetch_products: Applied store="ProductsState" action="FetchFulfilled"
//! ```
//!
//! With `RUST_LOG=debug` the entry points also log their payload once:
//!
//! ```text
//! DEBUG add_product{name=Widget}: add_product called draft=ProductDraft { name: "Widget", price: 9.99, .. }
//! ```

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
