//! Actions reduced by the product store.
//!
//! Each remote call ends in exactly one of these; `fetch_products` also announces its
//! start with [`ProductAction::FetchPending`].

use crate::model::{Product, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// A fetch was dispatched.
    FetchPending,
    /// A fetch returned the full collection.
    FetchFulfilled(Vec<Product>),
    /// A fetch failed with this message.
    FetchRejected(String),
    /// The service created this product.
    Added(Product),
    /// The service stored this version of a product.
    Updated(Product),
    /// The service deleted the product with this id.
    Deleted(ProductId),
}

impl ProductAction {
    pub fn name(&self) -> &'static str {
        match self {
            ProductAction::FetchPending => "FetchPending",
            ProductAction::FetchFulfilled(_) => "FetchFulfilled",
            ProductAction::FetchRejected(_) => "FetchRejected",
            ProductAction::Added(_) => "Added",
            ProductAction::Updated(_) => "Updated",
            ProductAction::Deleted(_) => "Deleted",
        }
    }
}
