//! Greedy word-wrap of free text into report lines.
//!
//! Explicit newlines split paragraphs; each paragraph is wrapped to the line
//! width with the font's metrics at the given size. A blank paragraph keeps one
//! empty line. A single word wider than the line is broken between characters.

use crate::layout::font_metrics::{FontMetricTable, MM_PER_PT};

/// Wraps `text` so that every line measures at most `max_width_mm` at
/// `font_size_pt`. Empty or whitespace-only text yields no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let max_em = max_width_mm / (font_size_pt * MM_PER_PT);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        wrap_paragraph(paragraph, metrics, max_em, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, metrics: &FontMetricTable, max_em: f32, out: &mut Vec<String>) {
    let mut words = paragraph.split_whitespace().peekable();
    if words.peek().is_none() {
        out.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_w = metrics.measure_str(word);

        if !current.is_empty() {
            if current_width + metrics.space_width + word_w <= max_em {
                current.push(' ');
                current.push_str(word);
                current_width += metrics.space_width + word_w;
                continue;
            }
            // Current line is full; flush it and start the word on a new line.
            out.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_w <= max_em {
            current.push_str(word);
            current_width = word_w;
            continue;
        }

        // Overlong word: hard-break between characters.
        for c in word.chars() {
            let char_w = metrics.char_width(c);
            if !current.is_empty() && current_width + char_w > max_em {
                out.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += char_w;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
