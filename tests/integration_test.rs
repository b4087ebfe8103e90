mod common;

use std::sync::Arc;

use catalog_store::api::mock::MockProductApi;
use catalog_store::api::ApiError;
use catalog_store::config::CatalogConfig;
use catalog_store::framework::StoreHandle;
use catalog_store::lifecycle::CatalogSession;
use catalog_store::model::{Category, Product, ProductDraft, ProductPatch};
use catalog_store::product_store::{FetchStatus, StoreError};

use common::{product_json, serve, unreachable_url, StubService};

/// Full end-to-end run: real store actor, real HTTP client, stub service.
#[tokio::test]
async fn test_catalog_session_end_to_end() {
    let stub = StubService::with_products(vec![product_json("1", "Existing", 10.0)]);
    let config = CatalogConfig::new(&serve(stub.router()).await).unwrap();
    let session = CatalogSession::connect(config).expect("Failed to connect");
    let store = &session.store;

    // Initial load
    let state = store.ensure_loaded().await.expect("Failed to load");
    assert_eq!(state.status, FetchStatus::Succeeded);
    assert_eq!(state.products.len(), 1);

    // Add
    let draft = ProductDraft::new("Widget", 19.99, Category::Clothing, "Soft").unwrap();
    let created = store.add_product(draft).await.expect("Failed to add");
    let state = store.snapshot().await.unwrap();
    assert_eq!(state.products.len(), 2);
    assert_eq!(state.products[1], created);

    // Update
    let updated = store
        .update_product(created.id.clone(), ProductPatch::default().price(24.5))
        .await
        .expect("Failed to update");
    assert_eq!(updated.price, 24.5);
    let state = store.snapshot().await.unwrap();
    assert_eq!(state.get(&created.id).map(|p| p.price), Some(24.5));

    // Delete
    store
        .delete_product(created.id.clone())
        .await
        .expect("Failed to delete");
    let state = store.snapshot().await.unwrap();
    assert!(state.get(&created.id).is_none());

    // The local snapshot agrees with a fresh fetch
    let fetched = store.fetch_products().await.expect("Failed to refetch");
    assert_eq!(store.snapshot().await.unwrap().products, fetched);
    assert_eq!(fetched.len(), 1);

    session.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_unreachable_service_marks_fetch_failed() {
    let config = CatalogConfig::new(&unreachable_url().await).unwrap();
    let session = CatalogSession::connect(config).unwrap();

    let result = session.store.fetch_products().await;
    assert!(matches!(result, Err(StoreError::Api(ApiError::Transport(_)))));

    let state = session.store.snapshot().await.unwrap();
    assert_eq!(state.status, FetchStatus::Failed);
    assert!(state.error.is_some());
    assert!(state.products.is_empty());

    session.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_keeps_snapshot() {
    let stub = StubService::with_products(vec![product_json("1", "Existing", 10.0)]);
    let config = CatalogConfig::new(&serve(stub.router()).await).unwrap();
    let session = CatalogSession::connect(config).unwrap();

    session.store.fetch_products().await.unwrap();
    let before = session.store.snapshot().await.unwrap();

    let draft = ProductDraft::new("Duplicate", 1.0, Category::Food, "").unwrap();
    let result = session.store.add_product(draft).await;

    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("Product already exists".to_string())
    );
    assert_eq!(session.store.snapshot().await.unwrap(), before);

    session.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_session_with_mock_service() {
    let mock = MockProductApi::new();
    mock.expect_list()
        .return_ok(vec![Product::new("1", "Mocked", 1.0, "Food")]);

    let session = CatalogSession::new(Arc::new(mock.clone()));
    let mut watcher = session.store.subscribe();

    session.store.fetch_products().await.unwrap();
    assert_eq!(watcher.borrow_and_update().status, FetchStatus::Succeeded);

    session.shutdown().await.unwrap();
    mock.verify();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_handles() {
    let session = CatalogSession::new(Arc::new(MockProductApi::new()));
    let clone = session.store.clone();

    let shutdown = tokio::spawn(session.shutdown());
    tokio::task::yield_now().await;
    assert!(!shutdown.is_finished());

    // The clone still works until it is dropped.
    assert!(clone.snapshot().await.is_ok());
    drop(clone);
    shutdown.await.unwrap().unwrap();
}
