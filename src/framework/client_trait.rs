//! # StoreHandle Trait
//!
//! Provides a common interface for domain-specific store handles, adding default
//! `snapshot` and `subscribe` methods built on top of a generic `StoreClient`.

use crate::framework::{FrameworkError, StoreClient, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain handles to inherit the standard read operations.
///
/// A handle only has to say where its `StoreClient` lives and how framework errors map
/// into its own error type; reading and observing the state come for free.
#[async_trait]
pub trait StoreHandle<S: StoreState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Read the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Observe every state the store publishes.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
