use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;
use std::path::Path;

pub fn run<S: SnippetStore>(store: &mut S, db_path: &Path) -> Result<CmdResult> {
    store.initialize()?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Database initialized at {}",
        db_path.display()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn initializes_and_reports_path() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Path::new("/home/me/snippets.db")).unwrap();

        assert!(store.is_initialized());
        assert!(result.messages[0]
            .content
            .contains("/home/me/snippets.db"));
    }

    #[test]
    fn safe_to_repeat() {
        let mut store = InMemoryStore::new();
        store.insert("keep", None, "x").unwrap();
        run(&mut store, Path::new("db")).unwrap();
        run(&mut store, Path::new("db")).unwrap();
        assert_eq!(store.len(), 1);
    }
}
