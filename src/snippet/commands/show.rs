use crate::commands::CmdResult;
use crate::error::{Result, SnippetError};
use crate::store::SnippetStore;

/// Fetches a snippet for printing; the clipboard is left alone.
pub fn run<S: SnippetStore>(store: &S, name: &str) -> Result<CmdResult> {
    match store.get_by_name(name) {
        Ok(snippet) => Ok(CmdResult::default().with_snippet(snippet)),
        Err(err @ SnippetError::NotFound(_)) => Ok(CmdResult::from_error(&err)),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_snippet() {
        let mut store = InMemoryStore::new();
        store.insert("baz", Some("py"), "print(1)").unwrap();

        let result = run(&store, "baz").unwrap();
        let snippet = result.snippet.unwrap();
        assert_eq!(snippet.content, "print(1)");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn missing_is_failure() {
        let store = InMemoryStore::new();
        let result = run(&store, "baz").unwrap();
        assert!(result.is_failure());
        assert!(result.snippet.is_none());
    }
}
