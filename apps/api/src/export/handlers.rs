//! Download endpoints: lay out, serialize, and return the PDF as an attachment.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::export::{export, render_pdf, ReportPayload};
use crate::layout::PaginatedReport;
use crate::models::document::DocumentId;
use crate::models::search::SearchResult;
use crate::state::AppState;

/// GET /api/v1/documents/:id/export
pub async fn handle_export_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let document = state.source.get_document(&DocumentId::from(id)).await?;
    let report = export(ReportPayload::Document(&document), &state.page_config);
    pdf_response(&report)
}

/// POST /api/v1/search/export
pub async fn handle_export_search(
    State(state): State<AppState>,
    Json(result): Json<SearchResult>,
) -> Result<Response, AppError> {
    let report = export(ReportPayload::SearchResult(&result), &state.page_config);
    pdf_response(&report)
}

fn pdf_response(report: &PaginatedReport) -> Result<Response, AppError> {
    let bytes = render_pdf(report)?;

    let disposition = content_disposition(&report.filename)?;

    info!(
        filename = %report.filename,
        pages = report.pages.len(),
        bytes = bytes.len(),
        "Report exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// `attachment; filename="<name>"`. Control characters and quotes cannot
/// appear in the quoted header value and are replaced with `_`; the report's
/// own filename is left untouched.
fn content_disposition(filename: &str) -> Result<HeaderValue, AppError> {
    let header_name: String = filename
        .chars()
        .map(|c| if c.is_control() || c == '"' { '_' } else { c })
        .collect();

    HeaderValue::from_bytes(format!("attachment; filename=\"{header_name}\"").as_bytes())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid report filename: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_keeps_plain_filenames() {
        let value = content_disposition("Clean_Air_Act.pdf").unwrap();
        assert_eq!(value, "attachment; filename=\"Clean_Air_Act.pdf\"");
    }

    #[test]
    fn test_disposition_replaces_line_breaks_and_quotes() {
        let value = content_disposition("Smith_v._Jones\r\nAppeal_\"A\".pdf").unwrap();
        assert_eq!(value, "attachment; filename=\"Smith_v._Jones__Appeal__A_.pdf\"");
    }

    #[test]
    fn test_disposition_passes_utf8_through() {
        let value = content_disposition("Société_Générale.pdf").unwrap();
        assert_eq!(
            value.as_bytes(),
            "attachment; filename=\"Société_Générale.pdf\"".as_bytes()
        );
    }
}
