//! # Snippet Architecture
//!
//! Snippet is a small library for keeping named, tagged pieces of code in a local
//! SQLite file, with a CLI client that moves them to and from the system clipboard.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Turns every error into a user-facing message             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, clipboard orchestration, result messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetStore trait                                       │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. The clipboard is reached only through the [`clipboard::Clipboard`]
//! trait, so commands are tested with an in-memory clipboard.
//!
//! ## Concurrency
//!
//! Every invocation is its own short-lived process, and several may run at once
//! against the same database file. [`store::sqlite::SqliteStore`] leans on SQLite
//! for this: WAL journaling, `IMMEDIATE` write transactions and a bounded busy
//! timeout. The `UNIQUE` constraint on `name` is what makes duplicate inserts fail.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Snippet`, `SnippetSummary`)
//! - [`config`]: Configuration management
//! - [`clipboard`]: Clipboard collaborator
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
