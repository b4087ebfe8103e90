//! # Product Store
//!
//! The client-side snapshot of the product catalog and its synchronization with the
//! remote service.
//!
//! ## Overview
//!
//! [`ProductStore`] is a cloneable handle. Each operation performs one remote call
//! through a [`ProductApi`] and then dispatches one [`ProductAction`] to the
//! [`StoreActor`] that owns the [`ProductsState`]:
//!
//! | Operation | On dispatch | On success | On failure |
//! |-----------|-------------|------------|------------|
//! | [`fetch_products`](ProductStore::fetch_products) | `Loading`, error cleared | `Succeeded`, products replaced | `Failed`, error set |
//! | [`add_product`](ProductStore::add_product) | – | appended | `Err`, state unchanged |
//! | [`update_product`](ProductStore::update_product) | – | replaced in place (never inserted) | `Err`, state unchanged |
//! | [`delete_product`](ProductStore::delete_product) | – | removed | `Err`, state unchanged |
//!
//! Only fetch carries a status; the other three report failure to their caller alone.
//!
//! ## Structure
//!
//! - [`state`] - [`ProductsState`], [`FetchStatus`] and the reducer
//! - [`actions`] - [`ProductAction`]
//! - [`error`] - [`StoreError`]
//! - [`new()`] - Factory function that creates the actor and handle
//!
//! ## Concurrency
//!
//! Remote calls run in the caller's task; only their outcomes go through the actor.
//! Two overlapping updates of the same product are applied in the order their
//! responses arrive, so the later response wins.

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::api::ProductApi;
use crate::framework::{FrameworkError, StoreActor, StoreClient, StoreHandle};
use crate::model::{Product, ProductDraft, ProductId, ProductPatch, ValidationError};

/// Creates a new product store actor and its handle.
///
/// The actor must be spawned (`tokio::spawn(actor.run())`) before the handle is used.
pub fn new(api: Arc<dyn ProductApi>) -> (StoreActor<ProductsState>, ProductStore) {
    let (actor, client) = StoreActor::new(32);
    (actor, ProductStore::new(client, api))
}

/// Handle for reading and synchronizing the product catalog.
#[derive(Clone)]
pub struct ProductStore {
    inner: StoreClient<ProductsState>,
    api: Arc<dyn ProductApi>,
}

#[async_trait]
impl StoreHandle<ProductsState> for ProductStore {
    type Error = StoreError;

    fn inner(&self) -> &StoreClient<ProductsState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::StoreUnavailable(e.to_string())
    }
}

impl ProductStore {
    pub fn new(inner: StoreClient<ProductsState>, api: Arc<dyn ProductApi>) -> Self {
        Self { inner, api }
    }

    async fn dispatch(&self, action: ProductAction) -> Result<ProductsState, StoreError> {
        self.inner.dispatch(action).await.map_err(Self::map_error)
    }

    /// Loads the whole collection, replacing whatever the store held.
    ///
    /// On failure the store records `Failed` and the error message, keeps its products,
    /// and the error is also returned.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        debug!("Sending request");
        self.dispatch(ProductAction::FetchPending).await?;

        match self.api.list().await {
            Ok(products) => {
                info!(count = products.len(), "Fetched products");
                self.dispatch(ProductAction::FetchFulfilled(products.clone()))
                    .await?;
                Ok(products)
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed");
                self.dispatch(ProductAction::FetchRejected(e.to_string()))
                    .await?;
                Err(e.into())
            }
        }
    }

    /// Fetches only if no fetch has been started yet, then returns the snapshot.
    ///
    /// This is the "load on first render" convention: a consumer that mounts while a
    /// fetch is already loading, finished or failed does not trigger another one.
    #[instrument(skip(self))]
    pub async fn ensure_loaded(&self) -> Result<ProductsState, StoreError> {
        let state = self.snapshot().await?;
        if state.status != FetchStatus::Idle {
            debug!(status = ?state.status, "Already loaded");
            return Ok(state);
        }
        self.fetch_products().await?;
        self.snapshot().await
    }

    /// Creates a product and appends the server's copy.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        debug!(?draft, "add_product called");
        draft.validate()?;

        let product = self.api.create(&draft).await.map_err(|e| {
            warn!(error = %e, "Create failed");
            e
        })?;
        info!(id = %product.id, "Product added");
        self.dispatch(ProductAction::Added(product.clone())).await?;
        Ok(product)
    }

    /// Sends a partial update and replaces the matching product in place.
    ///
    /// The product is matched by the id in the service's response. If the store does
    /// not hold that id, nothing is inserted.
    #[instrument(skip(self, id, patch), fields(id))]
    pub async fn update_product(
        &self,
        id: impl Into<ProductId>,
        patch: ProductPatch,
    ) -> Result<Product, StoreError> {
        let id = id.into();
        tracing::Span::current().record("id", tracing::field::display(&id));
        debug!(?patch, "update_product called");
        if id.is_empty() {
            return Err(ValidationError::MissingId.into());
        }
        patch.validate()?;

        let product = self.api.update(&id, &patch).await.map_err(|e| {
            warn!(error = %e, "Update failed");
            e
        })?;
        info!("Product updated");
        self.dispatch(ProductAction::Updated(product.clone()))
            .await?;
        Ok(product)
    }

    /// Deletes a product and removes every local copy with that id.
    #[instrument(skip(self, id), fields(id))]
    pub async fn delete_product(&self, id: impl Into<ProductId>) -> Result<(), StoreError> {
        let id = id.into();
        tracing::Span::current().record("id", tracing::field::display(&id));
        if id.is_empty() {
            return Err(ValidationError::MissingId.into());
        }

        self.api.remove(&id).await.map_err(|e| {
            warn!(error = %e, "Delete failed");
            e
        })?;
        info!("Product deleted");
        self.dispatch(ProductAction::Deleted(id)).await?;
        Ok(())
    }
}
