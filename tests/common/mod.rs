//! In-process stand-in for the product service, served by axum on an ephemeral port.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const TIMESTAMP: &str = "2024-12-01T03:50:58.645Z";

/// Products held by the stub, plus the last update body it received.
#[derive(Clone, Default)]
pub struct StubService {
    pub products: Arc<Mutex<Vec<Value>>>,
    pub last_patch: Arc<Mutex<Option<Value>>>,
    next_id: Arc<AtomicU64>,
}

impl StubService {
    pub fn with_products(products: Vec<Value>) -> Self {
        let stub = Self::default();
        *stub.products.lock().unwrap() = products;
        stub
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/products", get(list).post(create))
            .route("/api/products/:id", put(update).delete(remove))
            .with_state(self.clone())
    }
}

/// A service document as the stub stores it.
pub fn product_json(id: &str, name: &str, price: f64) -> Value {
    json!({
        "_id": id,
        "name": name,
        "price": price,
        "category": "Electronics",
        "description": "Test description",
        "createdAt": TIMESTAMP,
        "updatedAt": TIMESTAMP,
    })
}

async fn list(State(stub): State<StubService>) -> Json<Vec<Value>> {
    Json(stub.products.lock().unwrap().clone())
}

async fn create(State(stub): State<StubService>, Json(mut body): Json<Value>) -> Response {
    if body["name"] == "Duplicate" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Product already exists" })),
        )
            .into_response();
    }
    if body["name"] == "Broken" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let id = stub.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    body["_id"] = json!(format!("{id:024x}"));
    body["createdAt"] = json!(TIMESTAMP);
    body["updatedAt"] = json!(TIMESTAMP);
    stub.products.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update(
    State(stub): State<StubService>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Response {
    *stub.last_patch.lock().unwrap() = Some(patch.clone());
    let mut products = stub.products.lock().unwrap();
    match products.iter_mut().find(|product| product["_id"] == id.as_str()) {
        Some(product) => {
            if let (Some(stored), Some(changes)) = (product.as_object_mut(), patch.as_object()) {
                for (key, value) in changes {
                    stored.insert(key.clone(), value.clone());
                }
            }
            Json(product.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn remove(State(stub): State<StubService>, Path(id): Path<String>) -> Response {
    let mut products = stub.products.lock().unwrap();
    let before = products.len();
    products.retain(|product| product["_id"] != id.as_str());
    if products.len() == before {
        return not_found();
    }
    Json(json!({ "message": "Product deleted" })).into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Product not found" })),
    )
        .into_response()
}

/// A service that answers every request with the same status and raw body.
pub fn fixed_response(status: StatusCode, body: &'static str) -> Router {
    let respond = move || async move { (status, body) };
    Router::new()
        .route("/api/products", get(respond).post(respond))
        .route("/api/products/:id", put(respond).delete(respond))
}

/// Serves `app` on 127.0.0.1 and returns the base URL (`http://host:port/api`).
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// A base URL on a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}
