use super::{validate_insert, SnippetStore};
use crate::error::{Result, SnippetError};
use crate::model::{normalize_tag, Snippet, SnippetSummary};
use chrono::Utc;
use std::collections::BTreeMap;

/// Keeps snippets in a map keyed by name. Used by command tests.
#[derive(Default)]
pub struct InMemoryStore {
    snippets: BTreeMap<String, Snippet>,
    next_id: i64,
    initialized: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl SnippetStore for InMemoryStore {
    fn initialize(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn insert(&mut self, name: &str, tag: Option<&str>, content: &str) -> Result<i64> {
        validate_insert(name, content)?;
        if self.snippets.contains_key(name) {
            return Err(SnippetError::DuplicateName(name.to_string()));
        }

        self.next_id += 1;
        let snippet = Snippet {
            id: self.next_id,
            name: name.to_string(),
            tag: normalize_tag(tag),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.snippets.insert(name.to_string(), snippet);
        Ok(self.next_id)
    }

    fn get_by_name(&self, name: &str) -> Result<Snippet> {
        self.snippets
            .get(name)
            .cloned()
            .ok_or_else(|| SnippetError::NotFound(name.to_string()))
    }

    fn list(&self, tag_filter: Option<&str>) -> Result<Vec<SnippetSummary>> {
        let wanted = tag_filter.map(|t| normalize_tag(Some(t)));
        // BTreeMap iteration is already name-ordered; the stable sort keeps that within a tag
        let mut summaries: Vec<SnippetSummary> = self
            .snippets
            .values()
            .filter(|s| wanted.as_ref().map_or(true, |w| &s.tag == w))
            .map(SnippetSummary::from)
            .collect();
        summaries.sort_by(|a, b| {
            let ta = a.tag.as_deref().unwrap_or("");
            let tb = b.tag.as_deref().unwrap_or("");
            ta.cmp(tb)
        });
        Ok(summaries)
    }
}
