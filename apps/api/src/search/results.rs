use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::document::Document;
use crate::models::search::{GenerateResponse, SearchResult};

/// Library documents shown when `/generate` returns no relevant documents.
pub const FALLBACK_DOCUMENT_COUNT: usize = 3;

/// Adapts a `/generate` response into a `SearchResult`.
///
/// `library` is only read when the response carries no `relevant_documents`;
/// its first few entries stand in for them.
pub fn build_search_result(
    query: String,
    generated: GenerateResponse,
    library: &[Document],
    now: DateTime<Utc>,
) -> SearchResult {
    let documents = generated.relevant_documents.unwrap_or_else(|| {
        library
            .iter()
            .take(FALLBACK_DOCUMENT_COUNT)
            .cloned()
            .collect()
    });

    SearchResult {
        query,
        summary: generated.summary.unwrap_or_default(),
        documents,
        legal_concepts: generated.legal_concepts.unwrap_or_default(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
