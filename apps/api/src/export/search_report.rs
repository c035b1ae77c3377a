//! Search-result report: query and AI summary, the extracted legal concepts,
//! then one block per relevant document on a fresh page.

use crate::export::{BODY_PT, HEADER_PT, META_PT, SECTION_GAP_MM, TITLE_ADVANCE_MM, TITLE_PT};
use crate::layout::{PageConfig, PaginatedReport, Paginator};
use crate::models::document::Document;
use crate::models::search::SearchResult;

pub const SEARCH_REPORT_FILENAME: &str = "ai_research_summary.pdf";

/// Vertical room a document block needs before it may start on the current page.
const DOCUMENT_BLOCK_MM: f32 = 20.0;

pub fn export_search_result(result: &SearchResult, config: &PageConfig) -> PaginatedReport {
    let mut page = Paginator::new(config);

    page.set_font_size(TITLE_PT);
    page.line("AI Research Summary", TITLE_ADVANCE_MM);

    page.set_font_size(BODY_PT);
    page.line(format!("Your Query: \"{}\"", result.query), TITLE_ADVANCE_MM);

    page.wrapped(&result.summary);
    page.skip(SECTION_GAP_MM);

    if !result.legal_concepts.is_empty() {
        page.bullet_section("Key Legal Concepts:", HEADER_PT, &result.legal_concepts);
        page.skip(SECTION_GAP_MM);
    }

    if !result.documents.is_empty() {
        page.new_page();
        page.set_font_size(TITLE_PT);
        page.line("Relevant Documents", TITLE_ADVANCE_MM);
        for doc in &result.documents {
            document_block(&mut page, doc);
        }
    }

    page.finish(SEARCH_REPORT_FILENAME.to_string())
}

fn document_block(page: &mut Paginator<'_>, doc: &Document) {
    page.ensure_room(DOCUMENT_BLOCK_MM);

    page.set_font_size(HEADER_PT);
    page.body_line(doc.title.clone().unwrap_or_default());

    page.set_font_size(META_PT);
    page.body_line(format!("Category: {}", or_na(&doc.category)));
    page.body_line(format!("Date: {}", or_na(&doc.date)));
    page.skip(SECTION_GAP_MM);
}

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, FontFamily};

    fn make_config() -> PageConfig {
        default_page_config(FontFamily::Helvetica)
    }

    fn make_result(concepts: &[&str], documents: Vec<Document>) -> SearchResult {
        SearchResult {
            query: "implied employment contract".to_string(),
            summary: "Employee handbooks can create implied contracts.".to_string(),
            documents,
            legal_concepts: concepts.iter().map(|c| c.to_string()).collect(),
            timestamp: "2024-05-01T10:00:00.000Z".to_string(),
        }
    }

    fn make_doc(id: &str, title: &str) -> Document {
        let mut doc = Document::with_id(id);
        doc.title = Some(title.to_string());
        doc.category = Some("case_law".to_string());
        doc.date = Some("2022-06-15".to_string());
        doc
    }

    #[test]
    fn test_concepts_are_separate_bullets_in_order() {
        let report = export_search_result(&make_result(&["concept-A", "concept-B"], vec![]), &make_config());
        let texts = report.texts();
        let a = texts.iter().position(|t| *t == "\u{2022} concept-A").unwrap();
        let b = texts.iter().position(|t| *t == "\u{2022} concept-B").unwrap();
        assert_eq!(b, a + 1);
        assert_eq!(texts[a - 1], "Key Legal Concepts:");
    }

    #[test]
    fn test_header_query_and_summary_lines() {
        let report = export_search_result(&make_result(&[], vec![]), &make_config());
        assert_eq!(
            report.texts(),
            vec![
                "AI Research Summary",
                "Your Query: \"implied employment contract\"",
                "Employee handbooks can create implied contracts.",
            ]
        );
        assert_eq!(report.filename, "ai_research_summary.pdf");
        assert_eq!(report.pages.len(), 1);
    }

    #[test]
    fn test_empty_collections_render_no_sections() {
        let report = export_search_result(&make_result(&[], vec![]), &make_config());
        let texts = report.texts();
        assert!(!texts.contains(&"Key Legal Concepts:"));
        assert!(!texts.contains(&"Relevant Documents"));
    }

    #[test]
    fn test_documents_start_on_fresh_page() {
        let docs = vec![make_doc("doc-001", "Smith v. Johnson"), make_doc("doc-002", "Lease")];
        let report = export_search_result(&make_result(&["Employment Law"], docs), &make_config());
        assert_eq!(report.pages.len(), 2);

        let second = &report.pages[1].lines;
        let texts: Vec<&str> = second.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Relevant Documents",
                "Smith v. Johnson",
                "Category: case_law",
                "Date: 2022-06-15",
                "Lease",
                "Category: case_law",
                "Date: 2022-06-15",
            ]
        );
        let ys: Vec<f32> = second.iter().map(|l| l.y_mm).collect();
        assert_eq!(ys, vec![10.0, 20.0, 27.0, 34.0, 46.0, 53.0, 60.0]);
    }

    #[test]
    fn test_missing_document_fields_print_na() {
        let docs = vec![Document::with_id("doc-9")];
        let report = export_search_result(&make_result(&[], docs), &make_config());
        let texts = report.texts();
        assert!(texts.contains(&"Category: N/A"));
        assert!(texts.contains(&"Date: N/A"));
    }

    #[test]
    fn test_document_blocks_need_twenty_mm_of_slack() {
        let config = make_config();
        // Each block advances 26mm from the first title at y=20:
        // titles at 20, 46, ..., 254 (10 blocks); the 11th would start at 280
        // and 280 + 20 > 287, so it opens page 3.
        let docs: Vec<Document> = (0..11).map(|i| make_doc(&format!("d{i}"), &format!("Doc {i}"))).collect();
        let report = export_search_result(&make_result(&[], docs), &config);
        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.pages[2].lines[0].text, "Doc 10");
        assert_eq!(report.pages[2].lines[0].y_mm, 10.0);
    }

    #[test]
    fn test_long_summary_paginates() {
        let mut result = make_result(&["concept-A"], vec![]);
        result.summary = (0..50).map(|i| format!("Finding {i}.")).collect::<Vec<_>>().join("\n");
        let report = export_search_result(&result, &make_config());
        assert!(report.pages.len() > 1);
        assert!(report.texts().contains(&"\u{2022} concept-A"));
    }
}
