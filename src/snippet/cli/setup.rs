use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "snippet", bin_name = "snippet", version = get_version())]
#[command(about = "Save code snippets from the clipboard and get them back by name", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the clipboard contents as a new snippet
    #[command(alias = "a")]
    Add {
        /// Unique name of the snippet (case-sensitive)
        name: String,

        /// Optional tag used for grouping
        tag: Option<String>,

        /// Read the snippet from standard input instead of the clipboard
        #[arg(long)]
        stdin: bool,
    },

    /// Copy a snippet to the clipboard
    #[command(alias = "g")]
    Get {
        /// Name of the snippet
        name: String,
    },

    /// Print a snippet without touching the clipboard
    #[command(alias = "s")]
    Show {
        /// Name of the snippet
        name: String,
    },

    /// List snippets, grouped by tag
    #[command(alias = "ls")]
    List {
        /// Only show snippets with this tag
        tag: Option<String>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the database if it does not exist yet
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (db-path, busy-timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_tag_is_optional() {
        let cli = Cli::try_parse_from(["snippet", "add", "foo"]).unwrap();
        match cli.command {
            Commands::Add { name, tag, stdin } => {
                assert_eq!(name, "foo");
                assert_eq!(tag, None);
                assert!(!stdin);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn add_with_tag_and_stdin() {
        let cli = Cli::try_parse_from(["snippet", "add", "foo", "js", "--stdin"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Add { ref tag, stdin: true, .. } if tag.as_deref() == Some("js")
        ));
    }

    #[test]
    fn list_alias_and_filter() {
        let cli = Cli::try_parse_from(["snippet", "ls", "py", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::List { ref tag, json: false } if tag.as_deref() == Some("py")
        ));
    }

    #[test]
    fn get_requires_name() {
        assert!(Cli::try_parse_from(["snippet", "get"]).is_err());
    }
}
