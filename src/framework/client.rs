//! # Generic Client
//!
//! This module defines the generic client for communicating with a `StoreActor`.

use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::framework::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<S>` provides a type‑safe, async API for interacting with a
/// `StoreActor<S>`. Actions go over a Tokio mpsc channel and the resulting state comes
/// back over a oneshot channel. It also carries a `watch` receiver so any holder can
/// subscribe to published snapshots.
///
/// * **Cloneable** – holds only channel handles, so cloning is inexpensive.
/// * **Async API** – `dispatch` and `snapshot` resolve to `Result<S, FrameworkError>`.
/// * **Generic** – works with any record that implements `StoreState`.
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    watcher: watch::Receiver<S>,
}

impl<S: StoreState> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watcher: self.watcher.clone(),
        }
    }
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    /// Sends an action to the actor and returns the state it produced.
    pub async fn dispatch(&self, action: S::Action) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// Reads the current state from the actor.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// Returns a receiver that observes every state the actor publishes.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.watcher.clone()
    }
}
