//! # Session Lifecycle
//!
//! Starting, wiring and stopping the product store.
//!
//! ## The CatalogSession Pattern
//!
//! A [`CatalogSession`] owns the running store actor and hands out the
//! [`ProductStore`](crate::product_store::ProductStore) handle:
//!
//! ```rust,ignore
//! let config = CatalogConfig::from_env()?;
//! let session = CatalogSession::connect(config)?;
//!
//! session.store.fetch_products().await?;
//!
//! session.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the handle** - closes the sender side of the store's channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` and the loop exits
//! 3. **Await completion** - the join handle reports a panic as an error
//!
//! Clones of the handle held elsewhere keep the channel open, so shutdown waits for
//! them to be dropped as well.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber once per process. See the [`tracing`]
//! module for the log format and filtering.

pub mod session;
pub mod tracing;

pub use self::session::*;
pub use self::tracing::*;
