use std::sync::Arc;

use tracing::{error, info};

use crate::api::{HttpProductApi, ProductApi};
use crate::config::CatalogConfig;
use crate::product_store::{self, ProductStore};

/// A running product store and the task that drives it.
///
/// # Example
///
/// ```ignore
/// let session = CatalogSession::connect(CatalogConfig::from_env()?)?;
/// let products = session.store.fetch_products().await?;
/// session.shutdown().await?;
/// ```
pub struct CatalogSession {
    /// Handle for reading and synchronizing the catalog
    pub store: ProductStore,

    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSession {
    /// Spawns a store backed by the given service client.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        let (actor, store) = product_store::new(api);
        let handle = tokio::spawn(actor.run());
        info!("Catalog session started");
        Self { store, handle }
    }

    /// Spawns a store that talks to the configured HTTP service.
    pub fn connect(config: CatalogConfig) -> Result<Self, reqwest::Error> {
        info!(base_url = %config.base_url(), strict_status = config.strict_status, "Connecting");
        let api = HttpProductApi::new(config)?;
        Ok(Self::new(Arc::new(api)))
    }

    /// Stops the store actor and waits for it to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down session...");

        // Closing the last sender ends the actor's receive loop.
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
