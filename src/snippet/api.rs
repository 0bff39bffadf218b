//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every UI.
//!
//! It:
//! - **Dispatches** to the right command function
//! - **Initializes** the store lazily, once per process, before the first command
//! - **Absorbs errors**: every [`SnippetError`](crate::error::SnippetError) becomes
//!   a [`CmdResult`] with a specific message, so callers never see a raw error
//!
//! `SnippetApi<S, C>` is generic over the store and the clipboard:
//! - Production: `SnippetApi<SqliteStore, Box<dyn Clipboard>>`
//! - Testing: `SnippetApi<InMemoryStore, MemoryClipboard>`

use crate::clipboard::Clipboard;
use crate::commands;
use crate::error::Result;
use crate::store::SnippetStore;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct SnippetApi<S: SnippetStore, C: Clipboard> {
    store: S,
    clipboard: C,
    db_path: PathBuf,
    initialized: bool,
}

impl<S: SnippetStore, C: Clipboard> SnippetApi<S, C> {
    pub fn new(store: S, clipboard: C, db_path: PathBuf) -> Self {
        Self {
            store,
            clipboard,
            db_path,
            initialized: false,
        }
    }

    pub fn add(&mut self, name: &str, tag: Option<&str>) -> CmdResult {
        let outcome = self.ready().and_then(|_| {
            commands::add::run(&mut self.store, &self.clipboard, name, tag)
        });
        settle(outcome)
    }

    pub fn get(&mut self, name: &str) -> CmdResult {
        let outcome = self
            .ready()
            .and_then(|_| commands::get::run(&self.store, &self.clipboard, name));
        settle(outcome)
    }

    pub fn show(&mut self, name: &str) -> CmdResult {
        let outcome = self
            .ready()
            .and_then(|_| commands::show::run(&self.store, name));
        settle(outcome)
    }

    pub fn list(&mut self, tag: Option<&str>) -> CmdResult {
        let outcome = self
            .ready()
            .and_then(|_| commands::list::run(&self.store, tag));
        settle(outcome)
    }

    /// Explicit initialization; always runs, even if already done.
    pub fn init(&mut self) -> CmdResult {
        let outcome = commands::init::run(&mut self.store, &self.db_path);
        if outcome.is_ok() {
            self.initialized = true;
        }
        settle(outcome)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn ready(&mut self) -> Result<()> {
        if !self.initialized {
            self.store.initialize()?;
            self.initialized = true;
        }
        Ok(())
    }
}

/// Config does not need a store, so it can run even when the database can't be opened.
pub fn config(config_dir: &Path, action: ConfigAction) -> CmdResult {
    settle(commands::config::run(config_dir, action))
}

fn settle(outcome: Result<CmdResult>) -> CmdResult {
    outcome.unwrap_or_else(|err| {
        warn!(error = %err, "command failed");
        CmdResult::from_error(&err)
    })
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
