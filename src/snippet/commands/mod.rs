use crate::config::SnippetConfig;
use crate::error::SnippetError;
use crate::model::{Snippet, SnippetSummary};

pub mod add;
pub mod config;
pub mod get;
pub mod init;
pub mod list;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_snippets: Vec<SnippetSummary>,
    pub snippet: Option<Snippet>,
    pub config: Option<SnippetConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<SnippetSummary>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn with_config(mut self, config: SnippetConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// A result describing a failed command.
    pub fn from_error(err: &SnippetError) -> Self {
        let mut result = Self::default();
        for message in error_messages(err) {
            result.add_message(message);
        }
        result
    }

    pub fn is_failure(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// User-facing wording for each error kind, with a hint where one helps.
pub fn error_messages(err: &SnippetError) -> Vec<CmdMessage> {
    match err {
        SnippetError::DuplicateName(name) => vec![
            CmdMessage::error(format!("A snippet named '{}' already exists.", name)),
            CmdMessage::info("Snippet names are unique. Pick another name."),
        ],
        SnippetError::NotFound(name) => vec![
            CmdMessage::error(format!("No snippet named '{}' was found.", name)),
            CmdMessage::info("Run `snippet list` to see saved snippets."),
        ],
        SnippetError::EmptyInput(what) => vec![CmdMessage::error(format!(
            "Nothing to save: {}.",
            what
        ))],
        SnippetError::Storage(e) => vec![CmdMessage::error(format!(
            "Could not access the snippet database: {}",
            e
        ))],
        SnippetError::Io(e) => vec![CmdMessage::error(format!("File access failed: {}", e))],
        SnippetError::Clipboard(e) => vec![CmdMessage::error(format!("Clipboard error: {}", e))],
        SnippetError::Serialization(e) => {
            vec![CmdMessage::error(format!("Could not read config file: {}", e))]
        }
        SnippetError::Config(e) => vec![CmdMessage::error(e.clone())],
    }
}
