//! # StoreState Trait
//!
//! The `StoreState` trait defines the contract that a state record must implement to be
//! owned by the generic [`StoreActor`](crate::framework::StoreActor). It names the action
//! type the record understands and the pure `reduce` step that applies one action.
//!
//! # Architecture Note
//! By defining a contract (`StoreState`) for the state record, the message loop, the
//! snapshot publishing and the request/response plumbing are written *once*. A product
//! collection, a settings panel or a shopping cart all reuse the same actor.
//!
//! Reducers are synchronous. Remote calls happen in the handle, and the actor only ever
//! sees their outcome as an action.

use std::fmt::Debug;

/// Trait that any state record must implement to be managed by `StoreActor`.
pub trait StoreState: Clone + Default + Debug + Send + Sync + 'static {
    /// The actions this record can reduce (e.g., `FetchPending`, `Added`).
    type Action: Send + Sync + Debug;

    /// Apply one action to the record.
    fn reduce(&mut self, action: Self::Action);

    /// Short, stable name of an action for structured logs.
    fn action_name(action: &Self::Action) -> &'static str;
}
