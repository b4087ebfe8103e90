//! # Mock Product Service
//!
//! `MockProductApi` implements [`ProductApi`] entirely in memory. Tests script the
//! responses up front, run the code under test, then call [`MockProductApi::verify`].
//!
//! ## When to use the Mock vs the HTTP client
//!
//! | Feature | MockProductApi | HttpProductApi + stub server |
//! |---------|----------------|------------------------------|
//! | **Speed** | Instant | Fast (binds a local port) |
//! | **Determinism** | 100% Deterministic | Subject to the network stack |
//! | **Error Injection** | Easy (`return_err`) | Needs a stub route per failure |
//! | **Use Case** | Store transitions | Wire format and status handling |
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog_store::api::mock::MockProductApi;
//! use catalog_store::model::Product;
//! use catalog_store::product_store;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockProductApi::new();
//!     mock.expect_list()
//!         .return_ok(vec![Product::new("1", "Widget", 9.5, "Electronics")]);
//!
//!     let (actor, store) = product_store::new(Arc::new(mock.clone()));
//!     tokio::spawn(actor.run());
//!
//!     let products = store.fetch_products().await.unwrap();
//!     assert_eq!(products.len(), 1);
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in call order. A call that does not match the next
//! expectation panics, which fails the test that made it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{ApiError, ProductApi};
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected call and the response to hand back.
enum Expectation {
    List {
        response: Result<Vec<Product>, ApiError>,
    },
    Create {
        response: Result<Product, ApiError>,
    },
    Update {
        id: ProductId,
        response: Result<Product, ApiError>,
    },
    Remove {
        id: ProductId,
        response: Result<(), ApiError>,
    },
}

struct Scripted {
    expectation: Expectation,
    delay: Option<Duration>,
}

/// A call observed by the mock, with the payload it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List,
    Create(ProductDraft),
    Update(ProductId, ProductPatch),
    Remove(ProductId),
}

type Queue = Arc<Mutex<VecDeque<Scripted>>>;

/// A product service double with expectation tracking.
#[derive(Clone, Default)]
pub struct MockProductApi {
    expectations: Queue,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProductApi {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list` call.
    pub fn expect_list(&self) -> ExpectationBuilder<Vec<Product>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> ExpectationBuilder<Product> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects an `update` call for `id`.
    pub fn expect_update(&self, id: impl Into<ProductId>) -> ExpectationBuilder<Product> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    /// Expects a `remove` call for `id`.
    pub fn expect_remove(&self, id: impl Into<ProductId>) -> ExpectationBuilder<()> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Remove { id, response }
        })
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, call: RecordedCall) -> Scripted {
        self.calls.lock().unwrap().push(call.clone());
        let scripted = self.expectations.lock().unwrap().pop_front();
        match scripted {
            Some(scripted) => scripted,
            None => panic!("Unexpected call with no expectation left: {call:?}"),
        }
    }
}

async fn settle<T>(delay: Option<Duration>, response: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    response
}

#[async_trait]
impl ProductApi for MockProductApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        match self.next(RecordedCall::List) {
            Scripted {
                expectation: Expectation::List { response },
                delay,
            } => settle(delay, response).await,
            _ => panic!("Unexpected request or expectation mismatch: list"),
        }
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        match self.next(RecordedCall::Create(draft.clone())) {
            Scripted {
                expectation: Expectation::Create { response },
                delay,
            } => settle(delay, response).await,
            _ => panic!("Unexpected request or expectation mismatch: create"),
        }
    }

    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, ApiError> {
        match self.next(RecordedCall::Update(id.clone(), patch.clone())) {
            Scripted {
                expectation: Expectation::Update { id: expected, response },
                delay,
            } => {
                assert_eq!(&expected, id, "update called for an unexpected id");
                settle(delay, response).await
            }
            _ => panic!("Unexpected request or expectation mismatch: update {id}"),
        }
    }

    async fn remove(&self, id: &ProductId) -> Result<(), ApiError> {
        match self.next(RecordedCall::Remove(id.clone())) {
            Scripted {
                expectation: Expectation::Remove { id: expected, response },
                delay,
            } => {
                assert_eq!(&expected, id, "remove called for an unexpected id");
                settle(delay, response).await
            }
            _ => panic!("Unexpected request or expectation mismatch: remove {id}"),
        }
    }
}

/// Builder for one expectation.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    delay: Option<Duration>,
    make: Box<dyn FnOnce(Result<T, ApiError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        expectations: Queue,
        make: impl FnOnce(Result<T, ApiError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            delay: None,
            make: Box::new(make),
        }
    }

    /// Holds the response back, to control completion order between concurrent calls.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, ApiError>) {
        let expectation = (self.make)(response);
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Scripted {
            expectation,
            delay: self.delay,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[tokio::test]
    async fn test_mock_replays_scripted_responses() {
        let mock = MockProductApi::new();
        mock.expect_list().return_ok(vec![]);
        mock.expect_remove("7").return_err(ApiError::Transport("offline".into()));

        assert_eq!(mock.list().await, Ok(vec![]));
        assert_eq!(
            mock.remove(&ProductId::from("7")).await,
            Err(ApiError::Transport("offline".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_records_payloads() {
        let mock = MockProductApi::new();
        let created = Product::new("1", "Book", 12.0, "Books");
        mock.expect_create().return_ok(created.clone());

        let draft = ProductDraft::new("Book", 12.0, Category::Books, "").unwrap();
        assert_eq!(mock.create(&draft).await, Ok(created));
        assert_eq!(mock.calls(), vec![RecordedCall::Create(draft)]);
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_fails_on_unused_expectation() {
        let mock = MockProductApi::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }
}
