use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::library::{filter_documents, FilterCriteria};
use crate::models::document::{Document, DocumentId};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub documents: Vec<Document>,
    /// Documents matching the criteria.
    pub count: usize,
    /// Documents fetched before filtering.
    pub total: usize,
}

/// GET /api/v1/library?searchTerm=&category=
pub async fn handle_library(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<LibraryResponse>, AppError> {
    let documents = state.source.list_documents().await?;
    let visible: Vec<Document> = filter_documents(&documents, &criteria)
        .into_iter()
        .cloned()
        .collect();

    info!(
        search_term = %criteria.search_term,
        category = %criteria.category,
        visible = visible.len(),
        total = documents.len(),
        "Library filtered"
    );

    Ok(Json(LibraryResponse {
        count: visible.len(),
        total: documents.len(),
        documents: visible,
    }))
}

/// GET /api/v1/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    let document = state.source.get_document(&DocumentId::from(id)).await?;
    Ok(Json(document))
}
