//! Report Exporter. Lays out a document or a search result into fixed-size
//! pages, then serializes the pages to PDF.
//!
//! Layout is pure and never fails: missing fields only shorten the report.
//! Serialization (`pdf::render_pdf`) is the single terminal step.

pub mod document_report;
pub mod handlers;
pub mod pdf;
pub mod search_report;

use crate::layout::{PageConfig, PaginatedReport};
use crate::models::document::Document;
use crate::models::search::SearchResult;

pub use document_report::export_document;
pub use pdf::{render_pdf, ExportError};
pub use search_report::export_search_result;

pub(crate) const TITLE_PT: f32 = 18.0;
pub(crate) const HEADER_PT: f32 = 14.0;
pub(crate) const BODY_PT: f32 = 12.0;
pub(crate) const META_PT: f32 = 10.0;

/// Cursor advance after the title and banner lines.
pub(crate) const TITLE_ADVANCE_MM: f32 = 10.0;
/// Extra space closing a section.
pub(crate) const SECTION_GAP_MM: f32 = 5.0;

/// What a report is built from.
#[derive(Debug, Clone, Copy)]
pub enum ReportPayload<'a> {
    Document(&'a Document),
    SearchResult(&'a SearchResult),
}

pub fn export(payload: ReportPayload<'_>, config: &PageConfig) -> PaginatedReport {
    match payload {
        ReportPayload::Document(doc) => export_document(doc, config),
        ReportPayload::SearchResult(result) => export_search_result(result, config),
    }
}
