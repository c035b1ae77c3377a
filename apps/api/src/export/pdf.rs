//! PDF serialization of a laid-out report.
//!
//! One unembedded base-14 Type1 font with WinAnsiEncoding is shared by all
//! pages. Layout coordinates (millimetres, top-down) are converted to PDF
//! user space (points, bottom-up).

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};
use thiserror::Error;

use crate::layout::font_metrics::MM_PER_PT;
use crate::layout::{PaginatedReport, TextLine};

const FONT_RESOURCE: &[u8] = b"F1";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF content encoding failed: {0}")]
    Encoding(String),

    #[error("PDF serialization failed: {0}")]
    Serialization(String),
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Serializes `report` into PDF bytes. One PDF page per report page.
pub fn render_pdf(report: &PaginatedReport) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        (
            "BaseFont",
            Object::Name(report.font.base_font().as_bytes().to_vec()),
        ),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![(
            "F1",
            Object::Reference(font_id),
        )])),
    )]));

    let width_pt = mm_to_pt(report.page_width_mm);
    let height_pt = mm_to_pt(report.page_height_mm);
    let mut page_ids = Vec::with_capacity(report.pages.len());

    for page in &report.pages {
        let content: Content = Content {
            operations: page
                .lines
                .iter()
                .filter(|line| !line.text.is_empty())
                .flat_map(|line| text_operations(line, report.page_height_mm))
                .collect(),
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Encoding(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width_pt),
                    Object::Real(height_pt),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
            ("Resources", Object::Reference(resources_id)),
        ]);
        page_ids.push(doc.add_object(page_dict));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    Ok(buffer)
}

fn text_operations(line: &TextLine, page_height_mm: f32) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(FONT_RESOURCE.to_vec()),
                Object::Real(line.font_size_pt),
            ],
        ),
        Operation::new(
            "Td",
            vec![
                Object::Real(mm_to_pt(line.x_mm)),
                Object::Real(mm_to_pt(page_height_mm - line.y_mm)),
            ],
        ),
        Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&line.text),
                StringFormat::Literal,
            )],
        ),
        Operation::new("ET", vec![]),
    ]
}

/// Encodes text for a WinAnsiEncoding font. Latin-1 maps directly; the few
/// typographic characters WinAnsi adds in 0x80..0x9F are mapped explicitly.
/// Anything else becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            _ => b'?',
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
