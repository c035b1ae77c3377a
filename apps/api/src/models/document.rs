use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a legal document. The remote API emits string ids
/// (`"doc-001"`), but numeric ids are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Text(String),
    Number(i64),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Text(s) => f.write_str(s),
            DocumentId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId::Text(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId::Text(s)
    }
}

/// A legal document as returned by the remote API.
///
/// Every field except `id` is optional: listing and search payloads carry
/// partial records. `category` is kept as the raw string (`case_law`,
/// `contract`, `statute`, `regulation`, `brief`) because filtering compares it
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// ISO date (`2022-06-15`) or timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parties: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl Document {
    /// A document carrying only its id; used as the base for test fixtures
    /// and partial payloads.
    #[cfg(test)]
    pub fn with_id(id: impl Into<DocumentId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            category: None,
            date: None,
            case_number: None,
            court: None,
            jurisdiction: None,
            parties: None,
            summary: None,
            content: None,
            keywords: None,
        }
    }
}
