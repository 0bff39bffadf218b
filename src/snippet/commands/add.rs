use crate::clipboard::Clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnippetError};
use crate::model::normalize_tag;
use crate::store::SnippetStore;
use tracing::debug;

/// Saves the clipboard text under `name`.
///
/// The clipboard is read before the store is touched, so an empty clipboard
/// never reaches storage.
pub fn run<S: SnippetStore, C: Clipboard + ?Sized>(
    store: &mut S,
    clipboard: &C,
    name: &str,
    tag: Option<&str>,
) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(SnippetError::EmptyInput(
            "snippet name must not be blank".to_string(),
        ));
    }

    let content = clipboard.read()?;
    if content.trim().is_empty() {
        return Err(SnippetError::EmptyInput("the clipboard is empty".to_string()));
    }
    debug!(name, bytes = content.len(), "read snippet text");

    let tag = normalize_tag(tag);
    match store.insert(name, tag.as_deref(), &content) {
        Ok(_) => {}
        Err(err @ SnippetError::DuplicateName(_)) => return Ok(CmdResult::from_error(&err)),
        Err(err) => return Err(err),
    }

    let saved = match &tag {
        Some(t) => format!("Saved snippet '{}' [{}].", name, t),
        None => format!("Saved snippet '{}'.", name),
    };
    Ok(CmdResult::default().with_message(CmdMessage::success(saved)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn saves_clipboard_text() {
        let mut store = InMemoryStore::new();
        let clipboard = MemoryClipboard::with_text("console.log(1)");

        let result = run(&mut store, &clipboard, "foo", Some("js")).unwrap();

        assert!(!result.is_failure());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("'foo' [js]"));

        let saved = store.get_by_name("foo").unwrap();
        assert_eq!(saved.content, "console.log(1)");
        assert_eq!(saved.tag.as_deref(), Some("js"));
    }

    #[test]
    fn keeps_content_exactly() {
        let mut store = InMemoryStore::new();
        let text = "  indented\n\ttabbed\n";
        let clipboard = MemoryClipboard::with_text(text);

        run(&mut store, &clipboard, "ws", None).unwrap();
        assert_eq!(store.get_by_name("ws").unwrap().content, text);
    }

    #[test]
    fn untagged_when_tag_missing_or_empty() {
        let mut store = InMemoryStore::new();
        let clipboard = MemoryClipboard::with_text("x");

        run(&mut store, &clipboard, "a", None).unwrap();
        run(&mut store, &clipboard, "b", Some("")).unwrap();

        assert_eq!(store.get_by_name("a").unwrap().tag, None);
        assert_eq!(store.get_by_name("b").unwrap().tag, None);
    }

    #[test]
    fn empty_clipboard_fails_before_storage() {
        let mut store = InMemoryStore::new();
        let clipboard = MemoryClipboard::with_text("  \n ");

        let err = run(&mut store, &clipboard, "foo", None).unwrap_err();
        assert!(matches!(err, SnippetError::EmptyInput(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn blank_name_rejected() {
        let mut store = InMemoryStore::new();
        let clipboard = MemoryClipboard::with_text("x");

        let err = run(&mut store, &clipboard, "   ", None).unwrap_err();
        assert!(matches!(err, SnippetError::EmptyInput(_)));
    }

    #[test]
    fn duplicate_reports_hint_and_keeps_original() {
        let mut store = InMemoryStore::new();
        run(&mut store, &MemoryClipboard::with_text("first"), "foo", None).unwrap();

        let result = run(&mut store, &MemoryClipboard::with_text("second"), "foo", None).unwrap();

        assert!(result.is_failure());
        assert!(result.messages.iter().any(|m| m.content.contains("unique")));
        assert_eq!(store.get_by_name("foo").unwrap().content, "first");
    }

    #[test]
    fn clipboard_failure_propagates() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &MemoryClipboard::broken(), "foo", None).unwrap_err();
        assert!(matches!(err, SnippetError::Clipboard(_)));
        assert!(store.is_empty());
    }
}
