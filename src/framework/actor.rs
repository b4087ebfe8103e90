//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns a state record and
//! applies actions to it. It is the "Server" side of the Actor Model: messages are
//! processed sequentially, so the record never needs a lock.

use crate::framework::client::StoreClient;
use crate::framework::message::StoreRequest;
use crate::framework::state::StoreState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// The generic actor that owns one state record.
///
/// # Architecture Note
/// This struct owns the state (`state`), the receiver end of the request channel and the
/// sender end of the snapshot channel.
///
/// **Concurrency Model**:
/// Any number of `StoreClient` clones may dispatch at the same time, but the actor
/// reduces their actions one by one in arrival order. After every reduction the new
/// record is published on a `watch` channel so observers can re-render.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Dispatch actions or subscribe through the client.
///
/// ```rust
/// use catalog_store::framework::{StoreActor, StoreState};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { value: i64 }
///
/// #[derive(Debug)]
/// enum CounterAction { Add(i64) }
///
/// impl StoreState for Counter {
///     type Action = CounterAction;
///     fn reduce(&mut self, action: CounterAction) {
///         match action { CounterAction::Add(n) => self.value += n }
///     }
///     fn action_name(_: &CounterAction) -> &'static str { "Add" }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Counter>::new(8);
///     tokio::spawn(actor.run());
///
///     let state = client.dispatch(CounterAction::Add(2)).await.unwrap();
///     assert_eq!(state.value, 2);
/// }
/// ```
pub struct StoreActor<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StoreState> StoreActor<S> {
    /// Creates a new `StoreActor` holding `S::default()` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = S::default();
        let (publisher, watcher) = watch::channel(state.clone());
        let actor = Self {
            receiver,
            state,
            publisher,
        };
        let client = StoreClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "ProductsState" instead of the full path)
        let store = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    let name = S::action_name(&action);
                    debug!(store, ?action, "Dispatch");
                    self.state.reduce(action);
                    self.publisher.send_replace(self.state.clone());
                    info!(store, action = name, "Applied");
                    let _ = respond_to.send(self.state.clone());
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(store, "Snapshot");
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(store, "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        entries: Vec<String>,
    }

    #[derive(Debug)]
    enum TallyAction {
        Push(String),
        Clear,
    }

    impl StoreState for Tally {
        type Action = TallyAction;

        fn reduce(&mut self, action: TallyAction) {
            match action {
                TallyAction::Push(entry) => self.entries.push(entry),
                TallyAction::Clear => self.entries.clear(),
            }
        }

        fn action_name(action: &TallyAction) -> &'static str {
            match action {
                TallyAction::Push(_) => "Push",
                TallyAction::Clear => "Clear",
            }
        }
    }

    #[tokio::test]
    async fn test_dispatch_returns_reduced_state() {
        let (actor, client) = StoreActor::<Tally>::new(4);
        tokio::spawn(actor.run());

        let state = client.dispatch(TallyAction::Push("a".into())).await.unwrap();
        assert_eq!(state.entries, vec!["a".to_string()]);

        let state = client.dispatch(TallyAction::Push("b".into())).await.unwrap();
        assert_eq!(state.entries, vec!["a".to_string(), "b".to_string()]);

        let state = client.dispatch(TallyAction::Clear).await.unwrap();
        assert!(state.entries.is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_see_every_published_state() {
        let (actor, client) = StoreActor::<Tally>::new(4);
        tokio::spawn(actor.run());

        let mut watcher = client.subscribe();
        assert!(watcher.borrow_and_update().entries.is_empty());

        client.dispatch(TallyAction::Push("x".into())).await.unwrap();
        watcher.changed().await.unwrap();
        assert_eq!(watcher.borrow_and_update().entries, vec!["x".to_string()]);
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_drop() {
        let (actor, client) = StoreActor::<Tally>::new(4);
        let handle = tokio::spawn(actor.run());

        client.dispatch(TallyAction::Push("x".into())).await.unwrap();
        drop(client);

        handle.await.unwrap();
    }
}
