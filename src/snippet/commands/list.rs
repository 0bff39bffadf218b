use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

pub fn run<S: SnippetStore>(store: &S, tag: Option<&str>) -> Result<CmdResult> {
    let listed = store.list(tag)?;

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let empty = match tag {
            Some("") => "No untagged snippets.".to_string(),
            Some(t) => format!("No snippets tagged '{}'.", t),
            None => "No snippets saved yet.".to_string(),
        };
        result.add_message(CmdMessage::info(empty));
    }

    Ok(result.with_listed_snippets(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnippetSummary;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.insert("foo", Some("js"), "console.log(1)").unwrap();
        store.insert("bar", Some("js"), "console.log(2)").unwrap();
        store.insert("baz", Some("py"), "print(1)").unwrap();
        store
    }

    #[test]
    fn lists_everything_grouped() {
        let result = run(&seeded(), None).unwrap();
        assert_eq!(
            result.listed_snippets,
            vec![
                SnippetSummary::new("bar", Some("js".into())),
                SnippetSummary::new("foo", Some("js".into())),
                SnippetSummary::new("baz", Some("py".into())),
            ]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_by_tag() {
        let result = run(&seeded(), Some("py")).unwrap();
        assert_eq!(result.listed_snippets.len(), 1);
        assert_eq!(result.listed_snippets[0].name, "baz");
    }

    #[test]
    fn empty_filter_result_says_so() {
        let result = run(&seeded(), Some("go")).unwrap();
        assert!(result.listed_snippets.is_empty());
        assert!(!result.is_failure());
        assert_eq!(result.messages[0].content, "No snippets tagged 'go'.");
    }

    #[test]
    fn empty_store_says_so() {
        let result = run(&InMemoryStore::new(), None).unwrap();
        assert_eq!(result.messages[0].content, "No snippets saved yet.");
    }
}
