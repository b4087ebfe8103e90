//! The product store's state record and its reducer.

use super::actions::ProductAction;
use crate::framework::StoreState;
use crate::model::{Product, ProductId};

/// Lifecycle of the most recent fetch. Create, update and delete never touch it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The observable snapshot: products, fetch status and the last fetch error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl ProductsState {
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }
}

impl StoreState for ProductsState {
    type Action = ProductAction;

    fn reduce(&mut self, action: ProductAction) {
        match action {
            ProductAction::FetchPending => {
                self.status = FetchStatus::Loading;
                self.error = None;
            }
            ProductAction::FetchFulfilled(products) => {
                self.status = FetchStatus::Succeeded;
                self.products = products;
            }
            ProductAction::FetchRejected(message) => {
                self.status = FetchStatus::Failed;
                self.error = Some(message);
            }
            ProductAction::Added(product) => {
                self.products.push(product);
            }
            ProductAction::Updated(product) => {
                // Update never inserts: a product missing locally stays missing.
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *slot = product;
                }
            }
            ProductAction::Deleted(id) => {
                self.products.retain(|product| product.id != id);
            }
        }
    }

    fn action_name(action: &ProductAction) -> &'static str {
        action.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product::new(id, name, 10.0, "Electronics")
    }

    fn reduce(mut state: ProductsState, action: ProductAction) -> ProductsState {
        state.reduce(action);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ProductsState::default();
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(state.products.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_fetch_fulfilled_replaces_collection() {
        let state = ProductsState {
            products: vec![product("9", "Old")],
            status: FetchStatus::Loading,
            error: None,
        };
        let fetched = vec![product("1", "A"), product("2", "B")];
        let state = reduce(state, ProductAction::FetchFulfilled(fetched.clone()));
        assert_eq!(state.status, FetchStatus::Succeeded);
        assert_eq!(state.products, fetched);
    }

    #[test]
    fn test_fetch_rejected_keeps_products() {
        let state = ProductsState {
            products: vec![product("1", "A")],
            ..ProductsState::default()
        };
        let state = reduce(state, ProductAction::FetchPending);
        let state = reduce(state, ProductAction::FetchRejected("network down".into()));
        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("network down"));
        assert_eq!(state.products, vec![product("1", "A")]);
    }

    #[test]
    fn test_pending_clears_stale_error() {
        let state = ProductsState {
            status: FetchStatus::Failed,
            error: Some("network down".into()),
            ..ProductsState::default()
        };
        let state = reduce(state, ProductAction::FetchPending);
        assert_eq!(state.status, FetchStatus::Loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_added_appends() {
        let state = ProductsState {
            products: vec![product("1", "A")],
            ..ProductsState::default()
        };
        let state = reduce(state, ProductAction::Added(product("2", "New Product")));
        assert_eq!(state.products.len(), 2);
        assert_eq!(state.products[1], product("2", "New Product"));
        assert_eq!(state.status, FetchStatus::Idle);
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let state = ProductsState {
            products: vec![product("1", "A"), product("2", "B")],
            ..ProductsState::default()
        };
        let state = reduce(state, ProductAction::Updated(product("1", "A2")));
        assert_eq!(state.products, vec![product("1", "A2"), product("2", "B")]);
    }

    #[test]
    fn test_updated_never_inserts() {
        let state = ProductsState {
            products: vec![product("1", "A")],
            ..ProductsState::default()
        };
        let state = reduce(state, ProductAction::Updated(product("missing", "X")));
        assert_eq!(state.products, vec![product("1", "A")]);
    }

    #[test]
    fn test_deleted_removes_every_match() {
        let state = ProductsState {
            products: vec![product("1", "A"), product("2", "B"), product("1", "A dup")],
            ..ProductsState::default()
        };
        let state = reduce(state, ProductAction::Deleted(ProductId::from("1")));
        assert_eq!(state.products, vec![product("2", "B")]);
    }
}
