//! Axum route handlers for AI search and document summaries.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::document::DocumentId;
use crate::models::search::{AiSummary, SearchResult};
use crate::search::prompts::build_summary_prompt;
use crate::search::build_search_result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// POST /api/v1/search
///
/// Runs one AI search. The library listing is only fetched when the
/// response names no relevant documents.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResult>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let generated = state.source.generate(&request.query).await?;
    let library = if generated.relevant_documents.is_none() {
        state.source.list_documents().await?
    } else {
        Vec::new()
    };

    let result = build_search_result(request.query, generated, &library, Utc::now());
    info!(
        documents = result.documents.len(),
        concepts = result.legal_concepts.len(),
        "Search completed"
    );

    Ok(Json(result))
}

/// POST /api/v1/documents/:id/summary
pub async fn handle_document_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AiSummary>, AppError> {
    let document = state.source.get_document(&DocumentId::from(id)).await?;
    let prompt = build_summary_prompt(&document);
    let generated = state.source.generate(&prompt).await?;

    info!(document = %document.id, "AI summary generated");
    Ok(Json(AiSummary::from(generated)))
}
