//! Error types for the product store.

use thiserror::Error;

use crate::api::ApiError;
use crate::model::ValidationError;

/// Errors returned by the product store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The remote call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The draft or patch was refused before anything was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store actor is gone (session shut down).
    #[error("Product store unavailable: {0}")]
    StoreUnavailable(String),
}
