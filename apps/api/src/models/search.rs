use serde::{Deserialize, Serialize};

use crate::models::document::Document;

/// Body of `POST /generate` on the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub query: String,
}

/// Raw `/generate` payload. All fields are optional on the wire; callers
/// adapt it into a `SearchResult` or an `AiSummary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub legal_concepts: Option<Vec<String>>,
    #[serde(default)]
    pub relevant_documents: Option<Vec<Document>>,
}

/// The bundled output of one free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub legal_concepts: Vec<String>,
    #[serde(default)]
    pub timestamp: String,
}

/// AI analysis of a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    pub executive_summary: String,
    pub key_principles: Vec<String>,
}

impl From<GenerateResponse> for AiSummary {
    fn from(resp: GenerateResponse) -> Self {
        Self {
            executive_summary: resp.summary.unwrap_or_default(),
            key_principles: resp.legal_concepts.unwrap_or_default(),
        }
    }
}
