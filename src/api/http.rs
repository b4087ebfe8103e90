//! Reqwest-backed product service client.
//!
//! This adapter owns transport details only: URL building, JSON bodies, status
//! checks and decoding into [`Product`] values.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::{ApiError, ProductApi};
use crate::config::CatalogConfig;
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};

const CREATION_REJECTED: &str = "Failed to add product";

/// Talks to `{base}/products` over HTTP.
#[derive(Clone)]
pub struct HttpProductApi {
    client: Client,
    config: CatalogConfig,
}

impl HttpProductApi {
    /// Build a client for the configured service.
    ///
    /// No request timeout is set; a call runs until the exchange completes or fails.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: CatalogConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(%status, bytes = body.len(), "Response received");
        Ok((status, body.to_vec()))
    }

    fn check_status(&self, status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
        if self.config.strict_status && !status.is_success() {
            warn!(%status, "Request rejected");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: server_message(body).unwrap_or_else(|| status_text(status)),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let (status, body) = self.send(self.client.get(self.config.collection_url())).await?;
        self.check_status(status, &body)?;
        decode(&body)
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        debug!(?draft, "create called");
        let request = self.client.post(self.config.collection_url()).json(draft);
        let (status, body) = self.send(request).await?;
        if !status.is_success() {
            let message = server_message(&body).unwrap_or_else(|| CREATION_REJECTED.to_owned());
            warn!(%status, %message, "Creation rejected");
            return Err(ApiError::CreationRejected(message));
        }
        decode(&body)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, ApiError> {
        debug!(?patch, "update called");
        let request = self.client.put(self.config.item_url(id)).json(patch);
        let (status, body) = self.send(request).await?;
        self.check_status(status, &body)?;
        decode(&body)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &ProductId) -> Result<(), ApiError> {
        let url: Url = self.config.item_url(id);
        if !self.config.strict_status {
            // The exchange completing is enough; the body is never read.
            self.client.delete(url).send().await.map_err(map_transport_error)?;
            return Ok(());
        }
        let (status, body) = self.send(self.client.delete(url)).await?;
        self.check_status(status, &body)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The `message` field of an error body, if the service sent one.
fn server_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .filter(|message| !message.trim().is_empty())
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| status.as_u16().to_string())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|error| ApiError::Decode(error.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}
