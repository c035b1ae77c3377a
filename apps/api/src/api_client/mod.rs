//! Legal API client: the only module that talks to the remote legal search API.
//!
//! Three retrievals are consumed: the document listing, a single document by
//! id, and `/generate` (AI search and summaries). Failures are returned to the
//! caller as `ApiError`; there is no retry.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::document::{Document, DocumentId};
use crate::models::search::{GenerateRequest, GenerateResponse};

pub mod pacing;

pub use pacing::with_latency_floor;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Document {0} not found")]
    NotFound(DocumentId),

    #[error("Invalid legal API base URL: {0}")]
    BaseUrl(String),
}

/// Source of documents and AI search results.
///
/// Carried in `AppState` as `Arc<dyn DocumentSource>`; tests swap in an
/// in-memory implementation.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError>;

    async fn get_document(&self, id: &DocumentId) -> Result<Document, ApiError>;

    async fn generate(&self, query: &str) -> Result<GenerateResponse, ApiError>;
}

/// reqwest-backed `DocumentSource` for the remote legal API.
#[derive(Clone)]
pub struct LegalApiClient {
    client: Client,
    base_url: Url,
    min_latency: Duration,
}

impl LegalApiClient {
    pub fn new(base_url: &str, timeout: Duration, min_latency: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::BaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            min_latency,
        })
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// so `/`, `?` and `#` inside one stay part of that segment.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn document_url(&self, id: &DocumentId) -> Result<Url, ApiError> {
        let id_segment = id.to_string();
        // Dot segments are dropped by the URL path normalization.
        if matches!(id_segment.as_str(), "" | "." | "..") {
            return Err(ApiError::NotFound(id.clone()));
        }
        self.url(&["api", "documents", &id_segment])
    }

    /// Turns a response into `T`, mapping non-2xx statuses to `ApiError::Api`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Legal API returned an error status");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(ApiError::Parse)
    }
}

#[async_trait]
impl DocumentSource for LegalApiClient {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let request = self.client.get(self.url(&["api", "documents"])?).send();
        let response = with_latency_floor(request, self.min_latency).await?;
        let documents: Vec<Document> = Self::decode(response).await?;
        debug!(count = documents.len(), "Fetched document listing");
        Ok(documents)
    }

    async fn get_document(&self, id: &DocumentId) -> Result<Document, ApiError> {
        let request = self.client.get(self.document_url(id)?).send();
        let response = with_latency_floor(request, self.min_latency).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.clone()));
        }

        Self::decode(response).await
    }

    async fn generate(&self, query: &str) -> Result<GenerateResponse, ApiError> {
        let body = GenerateRequest {
            query: query.to_string(),
        };
        let request = self.client.post(self.url(&["generate"])?).json(&body).send();
        let response = with_latency_floor(request, self.min_latency).await?;
        let generated: GenerateResponse = Self::decode(response).await?;
        debug!(
            concepts = generated.legal_concepts.as_ref().map_or(0, Vec::len),
            documents = generated.relevant_documents.as_ref().map_or(0, Vec::len),
            "Generate call succeeded"
        );
        Ok(generated)
    }
}
