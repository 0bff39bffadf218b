//! Clipboard access.
//!
//! Commands only see the [`Clipboard`] trait. [`SystemClipboard`] shells out to
//! the platform tools; [`StdinSource`] lets `add` read from a pipe instead; and
//! [`MemoryClipboard`] backs the tests.

use crate::error::{Result, SnippetError};
use std::cell::RefCell;
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use tracing::debug;

pub trait Clipboard {
    /// Current clipboard text. An empty clipboard is `Ok("")`; callers decide
    /// what empty means.
    fn read(&self) -> Result<String>;

    fn write(&self, text: &str) -> Result<()>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn read(&self) -> Result<String> {
        (**self).read()
    }

    fn write(&self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}

/// A helper program and its arguments.
type Tool = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[Tool] = &[("pbcopy", &[])];
#[cfg(target_os = "macos")]
const PASTE_TOOLS: &[Tool] = &[("pbpaste", &[])];

#[cfg(target_os = "linux")]
const COPY_TOOLS: &[Tool] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("wl-copy", &[]),
];
#[cfg(target_os = "linux")]
const PASTE_TOOLS: &[Tool] = &[
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
    ("wl-paste", &["--no-newline"]),
];

#[cfg(target_os = "windows")]
const COPY_TOOLS: &[Tool] = &[("clip", &[])];
#[cfg(target_os = "windows")]
const PASTE_TOOLS: &[Tool] = &[("powershell", &["-command", "Get-Clipboard"])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const COPY_TOOLS: &[Tool] = &[];
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const PASTE_TOOLS: &[Tool] = &[];

/// The OS clipboard, reached through pbcopy/pbpaste, xclip/xsel/wl-clipboard
/// or clip/powershell. A tool that is not installed is skipped; the first one
/// that runs decides the outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn read(&self) -> Result<String> {
        read_with(PASTE_TOOLS)
    }

    fn write(&self, text: &str) -> Result<()> {
        write_with(COPY_TOOLS, text)
    }
}

fn read_with(tools: &[(&str, &[&str])]) -> Result<String> {
    for (program, args) in tools {
        match capture_from(program, args)? {
            Some(text) => return Ok(text),
            None => debug!(program, "clipboard tool not installed, trying next"),
        }
    }
    Err(no_tool(tools))
}

fn write_with(tools: &[(&str, &[&str])], text: &str) -> Result<()> {
    for (program, args) in tools {
        match pipe_into(program, args, text)? {
            Some(()) => return Ok(()),
            None => debug!(program, "clipboard tool not installed, trying next"),
        }
    }
    Err(no_tool(tools))
}

fn no_tool(tools: &[(&str, &[&str])]) -> SnippetError {
    if tools.is_empty() {
        return SnippetError::Clipboard("Clipboard not supported on this platform".to_string());
    }
    let names: Vec<&str> = tools.iter().map(|(program, _)| *program).collect();
    SnippetError::Clipboard(format!(
        "No clipboard tool found. Install one of: {}",
        names.join(", ")
    ))
}

/// `Ok(None)` when the program does not exist.
fn capture_from(program: &str, args: &[&str]) -> Result<Option<String>> {
    let output = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SnippetError::Clipboard(format!(
                "Failed to execute {}: {}",
                program, e
            )))
        }
    };

    if !output.status.success() {
        return Err(exit_error(program, &output.stderr));
    }
    String::from_utf8(output.stdout)
        .map(Some)
        .map_err(|e| SnippetError::Clipboard(format!("Invalid UTF-8 in clipboard: {}", e)))
}

/// `Ok(None)` when the program does not exist.
fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<Option<()>> {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SnippetError::Clipboard(format!(
                "Failed to spawn {}: {}",
                program, e
            )))
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            SnippetError::Clipboard(format!("Failed to write to {}: {}", program, e))
        })?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| SnippetError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;
    if output.status.success() {
        Ok(Some(()))
    } else {
        Err(exit_error(program, &output.stderr))
    }
}

fn exit_error(program: &str, stderr: &[u8]) -> SnippetError {
    let detail = String::from_utf8_lossy(stderr);
    let detail = detail.trim();
    if detail.is_empty() {
        SnippetError::Clipboard(format!("{} exited with error", program))
    } else {
        SnippetError::Clipboard(format!("{} exited with error: {}", program, detail))
    }
}

/// Reads the snippet text from standard input (`snippet add --stdin`).
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl Clipboard for StdinSource {
    fn read(&self) -> Result<String> {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }

    fn write(&self, _text: &str) -> Result<()> {
        Err(SnippetError::Clipboard(
            "standard input cannot be written to".to_string(),
        ))
    }
}

/// Clipboard held in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: RefCell<String>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
            fail: false,
        }
    }

    /// A clipboard whose every access fails.
    pub fn broken() -> Self {
        Self {
            text: RefCell::new(String::new()),
            fail: true,
        }
    }

    pub fn contents(&self) -> String {
        self.text.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&self) -> Result<String> {
        if self.fail {
            return Err(SnippetError::Clipboard("clipboard unavailable".to_string()));
        }
        Ok(self.text.borrow().clone())
    }

    fn write(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(SnippetError::Clipboard("clipboard unavailable".to_string()));
        }
        *self.text.borrow_mut() = text.to_string();
        Ok(())
    }
}
