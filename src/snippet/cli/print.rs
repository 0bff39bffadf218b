use chrono::{DateTime, Utc};
use colored::Colorize;
use snippet::api::{CmdMessage, MessageLevel};
use snippet::config::SnippetConfig;
use snippet::model::{Snippet, SnippetSummary};
use timeago::Formatter;

const UNTAGGED: &str = "(untagged)";
const RULE: &str = "--------------------------------";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub(crate) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

/// One header per tag, names indented below it. Input is already ordered.
pub(crate) fn render_grouped(snippets: &[SnippetSummary]) -> String {
    let mut out = String::new();
    let mut current: Option<Option<&str>> = None;

    for summary in snippets {
        let tag = summary.tag.as_deref();
        if current != Some(tag) {
            let header = tag.unwrap_or(UNTAGGED);
            out.push_str(&format!("{}\n", header.bold()));
            current = Some(tag);
        }
        out.push_str(&format!("  {}\n", summary.name));
    }
    out
}

pub(crate) fn render_json(snippets: &[SnippetSummary]) -> String {
    match serde_json::to_string_pretty(snippets) {
        Ok(json) => format!("{}\n", json),
        Err(e) => format!("{{\"error\": \"{}\"}}\n", e),
    }
}

pub(crate) fn render_snippet(snippet: &Snippet) -> String {
    let title = match &snippet.tag {
        Some(tag) => format!("{} {}", snippet.name.bold(), format!("[{}]", tag).yellow()),
        None => snippet.name.bold().to_string(),
    };
    let mut out = format!(
        "{}  {}\n{}\n{}",
        title,
        format_time_ago(snippet.created_at).dimmed(),
        RULE,
        snippet.content
    );
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub(crate) fn render_config(config: &SnippetConfig) -> String {
    let db_path = config
        .db_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(default)".to_string());
    format!(
        "db-path = {}\nbusy-timeout = {}\n",
        db_path, config.busy_timeout_ms
    )
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
