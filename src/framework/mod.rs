//! Generic single-writer state store.
//!
//! This module provides the building blocks for an observable, actor-owned state record:
//! one task owns the record and reduces actions sequentially, any number of cloneable
//! clients dispatch actions and read snapshots.
//!
//! # Main Components
//!
//! - [`StoreState`] - Trait that state records implement to be owned by the actor
//! - [`StoreActor`] - Generic actor that reduces actions and publishes snapshots
//! - [`StoreClient`] - Type-safe client for dispatching and observing
//! - [`StoreHandle`] - Trait giving domain handles `snapshot`/`subscribe` for free
//! - [`FrameworkError`] - Channel-level errors

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod state;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use state::StoreState;
