//! # Storage Layer
//!
//! The [`SnippetStore`] trait is the Storage Engine: schema setup, insert,
//! lookup by name and filtered enumeration.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage in a single SQLite file
//!   - One connection, owned by the store and closed when it is dropped
//!   - WAL journaling plus a bounded busy timeout, so several processes can
//!     share the file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same uniqueness and ordering rules
//!
//! ## Ordering
//!
//! Listings without a filter are ordered by tag, untagged snippets first, then
//! by name. Comparison is byte-wise, so `Zed` sorts before `alpha`. With a tag
//! filter the result is ordered by name only.
//!
//! ## Storage Format
//!
//! ```text
//! snippets(
//!     id        INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name      TEXT UNIQUE NOT NULL,
//!     tag       TEXT,
//!     content   TEXT NOT NULL,
//!     createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
//! )
//! ```

use crate::error::{Result, SnippetError};
use crate::model::{Snippet, SnippetSummary};

pub mod memory;
pub mod sqlite;

/// Abstract interface for snippet storage.
pub trait SnippetStore {
    /// Create the schema if it is missing. Safe to call on every start.
    fn initialize(&mut self) -> Result<()>;

    /// Insert a new snippet and return its id.
    ///
    /// Fails with [`SnippetError::DuplicateName`] when the name is taken.
    fn insert(&mut self, name: &str, tag: Option<&str>, content: &str) -> Result<i64>;

    /// Exact, case-sensitive lookup.
    fn get_by_name(&self, name: &str) -> Result<Snippet>;

    /// Snapshot of `(name, tag)` pairs, optionally restricted to one tag.
    fn list(&self, tag_filter: Option<&str>) -> Result<Vec<SnippetSummary>>;
}

/// Checks shared by every backend before anything is written.
pub(crate) fn validate_insert(name: &str, content: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SnippetError::EmptyInput(
            "snippet name must not be empty".to_string(),
        ));
    }
    if content.is_empty() {
        return Err(SnippetError::EmptyInput(
            "snippet content must not be empty".to_string(),
        ));
    }
    Ok(())
}
