use crate::clipboard::Clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnippetError};
use crate::store::SnippetStore;

/// Copies the named snippet to the clipboard.
pub fn run<S: SnippetStore, C: Clipboard + ?Sized>(
    store: &S,
    clipboard: &C,
    name: &str,
) -> Result<CmdResult> {
    let snippet = match store.get_by_name(name) {
        Ok(snippet) => snippet,
        Err(err @ SnippetError::NotFound(_)) => return Ok(CmdResult::from_error(&err)),
        Err(err) => return Err(err),
    };

    clipboard.write(&snippet.content)?;

    let copied = format!("Copied '{}' to the clipboard.", snippet.name);
    Ok(CmdResult::default()
        .with_snippet(snippet)
        .with_message(CmdMessage::success(copied)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.insert("foo", Some("js"), "console.log(1)").unwrap();
        store.insert("bar", Some("js"), "console.log(2)").unwrap();
        store
    }

    #[test]
    fn writes_content_to_clipboard() {
        let store = seeded();
        let clipboard = MemoryClipboard::default();

        let result = run(&store, &clipboard, "foo").unwrap();

        assert!(!result.is_failure());
        assert_eq!(clipboard.contents(), "console.log(1)");
        assert_eq!(result.snippet.unwrap().name, "foo");
    }

    #[test]
    fn missing_name_reported_and_clipboard_untouched() {
        let store = seeded();
        let clipboard = MemoryClipboard::with_text("keep me");

        let result = run(&store, &clipboard, "nope").unwrap();

        assert!(result.is_failure());
        assert!(result.messages[0].content.contains("'nope'"));
        assert_eq!(clipboard.contents(), "keep me");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = seeded();
        let result = run(&store, &MemoryClipboard::default(), "FOO").unwrap();
        assert!(result.is_failure());
    }

    #[test]
    fn clipboard_write_failure_propagates() {
        let store = seeded();
        let err = run(&store, &MemoryClipboard::broken(), "foo").unwrap_err();
        assert!(matches!(err, SnippetError::Clipboard(_)));
    }
}
