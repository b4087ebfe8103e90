//! # Framework Errors
//!
//! Errors raised by the store plumbing itself, independent of any domain.

/// Errors that can occur while talking to a `StoreActor`.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    StoreClosed,
    #[error("Store actor dropped response channel")]
    StoreDropped,
}
