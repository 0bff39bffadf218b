use clap::Parser;
use directories::{BaseDirs, ProjectDirs};
use snippet::api::{self, CmdResult, ConfigAction, SnippetApi};
use snippet::clipboard::{Clipboard, StdinSource, SystemClipboard};
use snippet::config::{SnippetConfig, SnippetPaths};
use snippet::error::{Result, SnippetError};
use snippet::store::sqlite::SqliteStore;
use std::env;
use std::path::PathBuf;
use tracing::debug;

mod cli;
use cli::print::{print_messages, render_config, render_grouped, render_json, render_snippet};
use cli::setup::{Cli, Commands};

type App = SnippetApi<SqliteStore, Box<dyn Clipboard>>;

fn main() {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    let result = run(args.command);
    print_messages(&result.messages);
    if result.is_failure() {
        std::process::exit(1);
    }
}

fn run(command: Commands) -> CmdResult {
    let paths = match resolve_paths() {
        Ok(paths) => paths,
        Err(e) => return CmdResult::from_error(&e),
    };

    match command {
        Commands::Add { name, tag, stdin } => {
            let clipboard: Box<dyn Clipboard> = if stdin {
                Box::new(StdinSource)
            } else {
                Box::new(SystemClipboard)
            };
            with_app(&paths, clipboard, |app| app.add(&name, tag.as_deref()))
        }
        Commands::Get { name } => with_app(&paths, Box::new(SystemClipboard), |app| app.get(&name)),
        Commands::Show { name } => {
            with_app(&paths, Box::new(SystemClipboard), |app| handle_show(app, &name))
        }
        Commands::List { tag, json } => with_app(&paths, Box::new(SystemClipboard), |app| {
            handle_list(app, tag.as_deref(), json)
        }),
        Commands::Init => with_app(&paths, Box::new(SystemClipboard), |app| app.init()),
        // Config must keep working even when the configured database is unusable
        Commands::Config { key, value } => handle_config(&paths, key, value),
    }
}

fn resolve_paths() -> Result<SnippetPaths> {
    let base = BaseDirs::new()
        .ok_or_else(|| SnippetError::Config("Could not determine home directory".into()))?;

    let config_dir = match env::var_os("SNIPPET_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("", "", "snippet")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| base.home_dir().join(".snippet")),
    };

    Ok(SnippetPaths {
        config_dir,
        home_dir: base.home_dir().to_path_buf(),
    })
}

/// The store is opened once here and closed when `app` is dropped at exit.
fn open_app(paths: &SnippetPaths, clipboard: Box<dyn Clipboard>) -> Result<App> {
    let config = SnippetConfig::load(&paths.config_dir)?;
    let db_path = paths.db_path(env::var_os("SNIPPET_DB").map(PathBuf::from), &config);
    debug!(db = %db_path.display(), config_dir = %paths.config_dir.display(), "resolved paths");

    let store = SqliteStore::open(&db_path, config.busy_timeout())?;
    Ok(SnippetApi::new(store, clipboard, db_path))
}

fn with_app(
    paths: &SnippetPaths,
    clipboard: Box<dyn Clipboard>,
    f: impl FnOnce(&mut App) -> CmdResult,
) -> CmdResult {
    match open_app(paths, clipboard) {
        Ok(mut app) => f(&mut app),
        Err(e) => CmdResult::from_error(&e),
    }
}

fn handle_show(app: &mut App, name: &str) -> CmdResult {
    let result = app.show(name);
    if let Some(snippet) = &result.snippet {
        print!("{}", render_snippet(snippet));
    }
    result
}

fn handle_list(app: &mut App, tag: Option<&str>, json: bool) -> CmdResult {
    let mut result = app.list(tag);
    if result.is_failure() {
        return result;
    }
    if json {
        print!("{}", render_json(&result.listed_snippets));
        // The empty-listing notice would corrupt the JSON on stdout
        result.messages.clear();
    } else {
        print!("{}", render_grouped(&result.listed_snippets));
    }
    result
}

fn handle_config(paths: &SnippetPaths, key: Option<String>, value: Option<String>) -> CmdResult {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(&paths.config_dir, action.clone());
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print!("{}", render_config(config));
    }
    result
}
