//! Single-document report: title, category/keyword banner, metadata block,
//! optional summary, then the full content.

use chrono::{DateTime, NaiveDate};

use crate::export::{BODY_PT, HEADER_PT, META_PT, SECTION_GAP_MM, TITLE_ADVANCE_MM, TITLE_PT};
use crate::layout::{PageConfig, PaginatedReport, Paginator};
use crate::models::document::Document;

/// Keywords shown next to the category in the banner line.
const MAX_BANNER_KEYWORDS: usize = 3;

pub fn export_document(doc: &Document, config: &PageConfig) -> PaginatedReport {
    let mut page = Paginator::new(config);

    page.set_font_size(TITLE_PT);
    page.line(doc.title.clone().unwrap_or_default(), TITLE_ADVANCE_MM);

    page.set_font_size(META_PT);
    page.line(banner_line(doc), TITLE_ADVANCE_MM);

    page.set_font_size(BODY_PT);
    for line in metadata_lines(doc) {
        page.body_line(line);
    }
    page.skip(SECTION_GAP_MM);

    if let Some(summary) = non_empty(&doc.summary) {
        page.set_font_size(HEADER_PT);
        page.body_line("Summary:");
        page.set_font_size(BODY_PT);
        page.wrapped(summary);
        page.skip(SECTION_GAP_MM);
    }

    page.set_font_size(HEADER_PT);
    page.body_line("Full Document Content:");
    page.set_font_size(BODY_PT);
    page.wrapped(doc.content.as_deref().unwrap_or_default());

    page.finish(document_filename(doc))
}

/// `CASE LAW | EMPLOYMENT | IMPLIED CONTRACT`
fn banner_line(doc: &Document) -> String {
    let category = doc
        .category
        .as_deref()
        .map(category_label)
        .unwrap_or_else(|| "UNKNOWN".to_string());

    std::iter::once(category)
        .chain(
            doc.keywords
                .iter()
                .flatten()
                .take(MAX_BANNER_KEYWORDS)
                .map(|k| k.to_uppercase()),
        )
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `case_law` → `CASE LAW`
pub fn category_label(category: &str) -> String {
    category.replace('_', " ").to_uppercase()
}

fn metadata_lines(doc: &Document) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(case_number) = non_empty(&doc.case_number) {
        lines.push(format!("Case Number: {case_number}"));
    }
    if let Some(court) = non_empty(&doc.court) {
        lines.push(format!("Court: {court}"));
    }
    if let Some(date) = non_empty(&doc.date) {
        lines.push(format!("Date: {}", format_long_date(date)));
    }
    if let Some(jurisdiction) = non_empty(&doc.jurisdiction) {
        lines.push(format!("Jurisdiction: {jurisdiction}"));
    }
    if let Some(parties) = non_empty(&doc.parties) {
        lines.push(format!("Parties: {parties}"));
    }
    lines
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// `2022-06-15` → `June 15, 2022`. Unparseable dates are printed verbatim.
pub fn format_long_date(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()));
    match parsed {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Spaces become underscores; nothing else is escaped.
pub fn document_filename(doc: &Document) -> String {
    match non_empty(&doc.title) {
        Some(title) => format!("{}.pdf", title.replace(' ', "_")),
        None => "document.pdf".to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
