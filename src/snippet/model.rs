use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved piece of code. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Surrogate key assigned by the store; names are the user-facing handle.
    pub id: i64,
    pub name: String,
    pub tag: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetSummary {
    pub name: String,
    pub tag: Option<String>,
}

impl SnippetSummary {
    pub fn new(name: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }
}

impl From<&Snippet> for SnippetSummary {
    fn from(snippet: &Snippet) -> Self {
        Self {
            name: snippet.name.clone(),
            tag: snippet.tag.clone(),
        }
    }
}

/// An empty tag means "no tag".
pub fn normalize_tag(tag: Option<&str>) -> Option<String> {
    match tag {
        Some(t) if !t.is_empty() => Some(t.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_is_no_tag() {
        assert_eq!(normalize_tag(Some("")), None);
        assert_eq!(normalize_tag(None), None);
        assert_eq!(normalize_tag(Some("js")), Some("js".to_string()));
    }

    #[test]
    fn tag_keeps_case() {
        assert_eq!(normalize_tag(Some("Rust")), Some("Rust".to_string()));
    }
}
