use super::{validate_insert, SnippetStore};
use crate::error::{Result, SnippetError};
use crate::model::{normalize_tag, Snippet, SnippetSummary};
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL,
    tag TEXT,
    content TEXT NOT NULL,
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
);
";

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Open (or create) the database file. The schema is not touched until
    /// [`SnippetStore::initialize`] runs.
    pub fn open<P: AsRef<Path>>(path: P, busy_timeout: Duration) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        // Must be set before anything else so the journal switch below waits too
        conn.busy_timeout(busy_timeout)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!(path = %path.display(), journal_mode = %mode, "opened snippet database");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SnippetStore for SqliteStore {
    fn initialize(&mut self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        debug!(path = %self.path.display(), "schema ready");
        Ok(())
    }

    fn insert(&mut self, name: &str, tag: Option<&str>, content: &str) -> Result<i64> {
        validate_insert(name, content)?;
        let tag = normalize_tag(tag);

        // IMMEDIATE takes the write lock up front; the UNIQUE index decides races
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        match tx.execute(
            "INSERT INTO snippets (name, tag, content) VALUES (?1, ?2, ?3)",
            params![name, tag, content],
        ) {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                debug!(name, "insert rejected, name already taken");
                return Err(SnippetError::DuplicateName(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(id, name, tag = tag.as_deref().unwrap_or(""), "snippet saved");
        Ok(id)
    }

    fn get_by_name(&self, name: &str) -> Result<Snippet> {
        self.conn
            .query_row(
                "SELECT id, name, tag, content, createdAt FROM snippets WHERE name = ?1",
                params![name],
                snippet_from_row,
            )
            .optional()?
            .ok_or_else(|| SnippetError::NotFound(name.to_string()))
    }

    fn list(&self, tag_filter: Option<&str>) -> Result<Vec<SnippetSummary>> {
        let summaries = match tag_filter {
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT name, tag FROM snippets
                     ORDER BY COALESCE(tag, '') ASC, name ASC",
                )?;
                let rows = stmt.query_map([], summary_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            Some("") => {
                let mut stmt = self.conn.prepare(
                    "SELECT name, tag FROM snippets
                     WHERE tag IS NULL OR tag = ''
                     ORDER BY name ASC",
                )?;
                let rows = stmt.query_map([], summary_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            Some(tag) => {
                let mut stmt = self.conn.prepare(
                    "SELECT name, tag FROM snippets
                     WHERE tag = ?1
                     ORDER BY name ASC",
                )?;
                let rows = stmt.query_map(params![tag], summary_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        debug!(count = summaries.len(), filter = ?tag_filter, "listed snippets");
        Ok(summaries)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn snippet_from_row(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    let tag: Option<String> = row.get(2)?;
    let created_at: String = row.get(4)?;
    Ok(Snippet {
        id: row.get(0)?,
        name: row.get(1)?,
        tag: normalize_tag(tag.as_deref()),
        content: row.get(3)?,
        created_at: parse_timestamp(&created_at)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into()))?,
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<SnippetSummary> {
    let tag: Option<String> = row.get(1)?;
    Ok(SnippetSummary::new(
        row.get::<_, String>(0)?,
        normalize_tag(tag.as_deref()),
    ))
}

/// `CURRENT_TIMESTAMP` yields `YYYY-MM-DD HH:MM:SS` in UTC; RFC 3339 is
/// accepted for rows written by other tools.
fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").map(|naive| naive.and_utc())
}
