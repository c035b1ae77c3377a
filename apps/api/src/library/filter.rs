//! Client-side document filter: free-text term plus exact category.
//!
//! Pure function of its inputs. Absent fields degrade to "no match", never
//! to an error, and the input order is preserved.

use serde::{Deserialize, Serialize};

use crate::models::document::Document;

/// Category value that disables the category criterion.
pub const ALL_CATEGORIES: &str = "all";

/// Filter state for the library view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: default_category(),
        }
    }
}

#[cfg(test)]
impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
        }
    }
}

/// Returns the documents matching both criteria, in input order.
pub fn filter_documents<'a>(documents: &'a [Document], criteria: &FilterCriteria) -> Vec<&'a Document> {
    // Lowercase once; the text fields are lowercased per document.
    let needle = criteria.search_term.to_lowercase();
    documents
        .iter()
        .filter(|doc| matches_search(doc, &needle) && matches_category(doc, &criteria.category))
        .collect()
}

/// Empty term matches everything. Only the empty string is "empty": a term
/// made of spaces is searched for literally.
fn matches_search(doc: &Document, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&doc.title, &doc.case_number, &doc.summary]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_category(doc: &Document, category: &str) -> bool {
    category == ALL_CATEGORIES || doc.category.as_deref() == Some(category)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
