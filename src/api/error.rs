//! Error types for the remote product service.

use thiserror::Error;

/// Failures surfaced by a [`ProductApi`](crate::api::ProductApi).
///
/// `Transport` and `CreationRejected` display their message verbatim so it can be shown
/// to the user (and stored as the fetch error) without decoration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, reset connection).
    #[error("{0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The service refused to create the product.
    #[error("{0}")]
    CreationRejected(String),

    /// The service answered list/update/delete with a non-success status.
    #[error("Product service returned {status}: {message}")]
    Rejected { status: u16, message: String },
}
