//! # Store Messages
//!
//! This module defines the message types used for communication between
//! the `StoreClient` and the `StoreActor`.

use crate::framework::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the actor.
///
/// # Single Writer
/// Every mutation of the state record travels through `Dispatch`, so the actor is the
/// only writer. `Snapshot` lets a caller read the record without subscribing.
///
/// Both variants answer with the record *after* the request was handled, which lets a
/// caller observe exactly the state its own action produced.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Dispatch {
        action: S::Action,
        respond_to: Response<S>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}
