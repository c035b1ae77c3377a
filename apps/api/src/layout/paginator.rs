//! Cursor-based page layout: places text lines top-down and starts a new page
//! whenever the next line would cross the bottom margin.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{get_metrics, FontFamily, FontMetricTable, PageConfig};
use crate::layout::wrap::wrap_text;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One positioned line of text. `y_mm` is the baseline, measured from the top
/// edge of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    pub lines: Vec<TextLine>,
}

/// A finished report: fixed page geometry plus the laid-out pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedReport {
    pub filename: String,
    pub font: FontFamily,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub pages: Vec<ReportPage>,
}

#[cfg(test)]
impl PaginatedReport {
    /// All line texts in reading order, across pages.
    pub fn texts(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.text.as_str()))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Paginator
// ────────────────────────────────────────────────────────────────────────────

/// Private accumulator for one export. Starts on a blank first page with the
/// cursor at the top margin.
pub struct Paginator<'a> {
    config: &'a PageConfig,
    metrics: &'static FontMetricTable,
    pages: Vec<ReportPage>,
    y_mm: f32,
    font_size_pt: f32,
}

impl<'a> Paginator<'a> {
    pub fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            metrics: get_metrics(&config.font),
            pages: vec![ReportPage::default()],
            y_mm: config.margin_mm,
            font_size_pt: 12.0,
        }
    }

    pub fn set_font_size(&mut self, font_size_pt: f32) {
        self.font_size_pt = font_size_pt;
    }

    /// Current cursor position (baseline of the next line).
    #[cfg(test)]
    pub fn cursor_mm(&self) -> f32 {
        self.y_mm
    }

    #[cfg(test)]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn new_page(&mut self) {
        self.pages.push(ReportPage::default());
        self.y_mm = self.config.margin_mm;
    }

    /// Starts a new page unless `height_mm` still fits above the bottom margin.
    pub fn ensure_room(&mut self, height_mm: f32) {
        if self.y_mm + height_mm > self.config.bottom_limit_mm() {
            self.new_page();
        }
    }

    /// Emits one line at the cursor, then moves the cursor down by `advance_mm`.
    /// The line itself must fit one line height, otherwise it goes to a new page.
    pub fn line(&mut self, text: impl Into<String>, advance_mm: f32) {
        self.ensure_room(self.config.line_height_mm);
        let line = TextLine {
            text: text.into(),
            x_mm: self.config.margin_mm,
            y_mm: self.y_mm,
            font_size_pt: self.font_size_pt,
        };
        // pages is never empty: new() seeds the first page.
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
        self.y_mm += advance_mm;
    }

    /// Emits a line advancing by one line height.
    pub fn body_line(&mut self, text: impl Into<String>) {
        self.line(text, self.config.line_height_mm);
    }

    /// Wraps `text` at the current font size and emits one body line per
    /// sub-line. Returns the number of lines emitted.
    pub fn wrapped(&mut self, text: &str) -> usize {
        let lines = wrap_text(
            text,
            self.metrics,
            self.font_size_pt,
            self.config.text_width_mm(),
        );
        let count = lines.len();
        for line in lines {
            self.body_line(line);
        }
        count
    }

    /// Emits a section header followed by one `• item` line per item.
    pub fn bullet_section(&mut self, header: &str, header_size_pt: f32, items: &[String]) {
        let body_size = self.font_size_pt;
        self.set_font_size(header_size_pt);
        self.body_line(header);
        self.set_font_size(body_size);
        for item in items {
            self.body_line(format!("\u{2022} {item}"));
        }
    }

    /// Moves the cursor down without emitting anything.
    pub fn skip(&mut self, height_mm: f32) {
        self.y_mm += height_mm;
    }

    pub fn finish(self, filename: String) -> PaginatedReport {
        PaginatedReport {
            filename,
            font: self.config.font,
            page_width_mm: self.config.page_width_mm,
            page_height_mm: self.config.page_height_mm,
            pages: self.pages,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_config;

    fn make_config() -> PageConfig {
        default_page_config(FontFamily::Helvetica)
    }

    #[test]
    fn test_starts_on_one_page_at_top_margin() {
        let config = make_config();
        let paginator = Paginator::new(&config);
        assert_eq!(paginator.page_count(), 1);
        assert_eq!(paginator.cursor_mm(), 10.0);
    }

    #[test]
    fn test_line_records_position_and_advances() {
        let config = make_config();
        let mut paginator = Paginator::new(&config);
        paginator.set_font_size(18.0);
        paginator.line("Title", 10.0);
        paginator.set_font_size(12.0);
        paginator.body_line("Body");

        let report = paginator.finish("r.pdf".to_string());
        let lines = &report.pages[0].lines;
        assert_eq!(lines[0].y_mm, 10.0);
        assert_eq!(lines[0].font_size_pt, 18.0);
        assert_eq!(lines[1].y_mm, 20.0);
        assert_eq!(lines[1].x_mm, 10.0);
        assert_eq!(lines[1].font_size_pt, 12.0);
    }

    #[test]
    fn test_page_breaks_when_next_line_crosses_bottom_margin() {
        let config = make_config();
        let mut paginator = Paginator::new(&config);
        // Baselines 10, 17, ..., 276 fit (276 + 7 = 283 ≤ 287); 283 does not.
        for i in 0..39 {
            paginator.body_line(format!("line {i}"));
        }
        assert_eq!(paginator.page_count(), 1);
        paginator.body_line("line 39");
        assert_eq!(paginator.page_count(), 2);

        let report = paginator.finish("r.pdf".to_string());
        assert_eq!(report.pages[0].lines.len(), 39);
        assert_eq!(report.pages[1].lines[0].y_mm, 10.0);
        assert_eq!(report.pages[1].lines[0].text, "line 39");
    }

    #[test]
    fn test_ensure_room_uses_requested_slack() {
        let config = make_config();
        let mut paginator = Paginator::new(&config);
        paginator.skip(260.0); // cursor at 270
        paginator.ensure_room(7.0);
        assert_eq!(paginator.page_count(), 1);
        paginator.ensure_room(20.0);
        assert_eq!(paginator.page_count(), 2);
        assert_eq!(paginator.cursor_mm(), 10.0);
    }

    #[test]
    fn test_wrapped_empty_text_emits_nothing() {
        let config = make_config();
        let mut paginator = Paginator::new(&config);
        assert_eq!(paginator.wrapped(""), 0);
        assert_eq!(paginator.cursor_mm(), 10.0);
        let report = paginator.finish("r.pdf".to_string());
        assert!(report.pages[0].lines.is_empty());
    }

    #[test]
    fn test_bullet_section_keeps_item_order() {
        let config = make_config();
        let mut paginator = Paginator::new(&config);
        let items = vec!["concept-A".to_string(), "concept-B".to_string()];
        paginator.bullet_section("Key Legal Concepts:", 14.0, &items);
        let report = paginator.finish("r.pdf".to_string());
        assert_eq!(
            report.texts(),
            vec!["Key Legal Concepts:", "\u{2022} concept-A", "\u{2022} concept-B"]
        );
        assert_eq!(report.pages[0].lines[0].font_size_pt, 14.0);
        assert_eq!(report.pages[0].lines[1].font_size_pt, 12.0);
    }

    #[test]
    fn test_bullet_section_header_moves_to_new_page_when_full() {
        let config = make_config();
        let mut paginator = Paginator::new(&config);
        paginator.skip(275.0); // cursor at 285: header does not fit
        paginator.bullet_section("Key Legal Concepts:", 14.0, &["a".to_string()]);
        let report = paginator.finish("r.pdf".to_string());
        assert!(report.pages[0].lines.is_empty());
        assert_eq!(report.pages[1].lines[0].text, "Key Legal Concepts:");
    }
}
