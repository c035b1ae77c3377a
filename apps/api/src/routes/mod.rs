pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::library::handlers as library;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Library
        .route("/api/v1/library", get(library::handle_library))
        .route("/api/v1/documents/:id", get(library::handle_get_document))
        .route(
            "/api/v1/documents/:id/summary",
            post(search::handle_document_summary),
        )
        .route(
            "/api/v1/documents/:id/export",
            get(export::handle_export_document),
        )
        // AI search
        .route("/api/v1/search", post(search::handle_search))
        .route("/api/v1/search/export", post(export::handle_export_search))
        .with_state(state)
}
