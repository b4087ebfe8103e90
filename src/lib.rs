#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Catalog Store
//!
//! > **A client-side product catalog kept in sync with a REST product service.**
//!
//! This crate holds an observable snapshot of a product collection (products, a fetch
//! status and the last fetch error) and keeps it consistent with a remote service that
//! lists, creates, updates and deletes products.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a Store Actor?
//!
//! - **Single Writer**: one task owns the state record and applies actions in order.
//! - **Observable**: every applied action publishes a snapshot on a `watch` channel.
//! - **Testable**: the network sits behind the [`ProductApi`](api::ProductApi) trait.
//!
//! Remote calls never hold the store. A handle performs the call in its own task and
//! then dispatches the outcome as an action; the reducer is the only place state changes.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: `StoreActor<S>`
//! [`StoreActor<S: StoreState>`](framework::StoreActor) runs the message loop for any
//! state record with a reducer. [`ProductsState`](product_store::ProductsState) is the
//! one this crate ships.
//!
//! ### Mocking
//! [`MockProductApi`](api::mock::MockProductApi) scripts service responses so store
//! transitions can be tested without a server. See the [`api::mock`] module.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! [`ApiError`](api::ApiError) covers the wire, [`ValidationError`](model::ValidationError)
//! covers input, and [`StoreError`](product_store::StoreError) wraps both with `#[from]`.
//!
//! ### 2. Status Only Tracks Fetch
//! Create, update and delete report failure to their caller and leave the status and
//! error slot alone.
//!
//! ### 3. Observability
//! `tracing` spans wrap every store operation and HTTP call. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic single-writer store.
//! - **Key items**: [`StoreState`](framework::StoreState), [`StoreActor`](framework::StoreActor), [`StoreHandle`](framework::StoreHandle).
//!
//! ### 2. The Data ([`model`])
//! [`Product`](model::Product), [`ProductDraft`](model::ProductDraft),
//! [`ProductPatch`](model::ProductPatch) and the input checks.
//!
//! ### 3. The Wire ([`api`], [`config`])
//! The [`ProductApi`](api::ProductApi) seam and its `reqwest` implementation, configured
//! by [`CatalogConfig`](config::CatalogConfig).
//!
//! ### 4. The Store ([`product_store`])
//! [`ProductStore`](product_store::ProductStore) with `fetch_products`, `add_product`,
//! `update_product` and `delete_product`.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`CatalogSession`](lifecycle::CatalogSession) starts and stops the store.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # List products from the default service
//! RUST_LOG=info cargo run -- list
//!
//! # Point at another service
//! CATALOG_API_URL=http://catalog.internal/api cargo run -- add --name Widget --price 9.99
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_store;
