//! # Remote Product Service
//!
//! The [`ProductApi`] trait is the seam between the store and the network. It has four
//! operations matching the service's REST surface:
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/products` | [`ProductApi::list`] |
//! | POST | `/products` | [`ProductApi::create`] |
//! | PUT | `/products/{id}` | [`ProductApi::update`] |
//! | DELETE | `/products/{id}` | [`ProductApi::remove`] |
//!
//! - [`http`] - the production client built on `reqwest`
//! - [`mock`] - a scripted in-memory double for tests
//!
//! Implementations never swallow errors: every failure is returned to the caller as an
//! [`ApiError`].

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::HttpProductApi;

use async_trait::async_trait;

use crate::model::{Product, ProductDraft, ProductId, ProductPatch};

#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the whole collection, in the order the service returns it.
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    /// Create a product. The result carries the server-assigned id and timestamps.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError>;

    /// Apply a partial update and return the product as the service now stores it.
    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, ApiError>;

    /// Delete a product.
    async fn remove(&self, id: &ProductId) -> Result<(), ApiError>;
}
