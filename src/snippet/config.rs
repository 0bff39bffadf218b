use crate::error::{Result, SnippetError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DB_FILENAME: &str = "snippets.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

pub const KEYS: &[&str] = &["db-path", "busy-timeout"];

/// User configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnippetConfig {
    /// Database file to use instead of `~/snippets.db`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// How long to wait on a locked database before giving up
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl SnippetConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "db-path" => Some(
                self.db_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "busy-timeout" => Some(self.busy_timeout_ms.to_string()),
            _ => None,
        }
    }

    /// An empty `db-path` goes back to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "db-path" => {
                self.db_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "busy-timeout" => {
                self.busy_timeout_ms = value.parse().map_err(|_| {
                    SnippetError::Config(format!(
                        "busy-timeout must be a number of milliseconds, got '{}'",
                        value
                    ))
                })?;
            }
            other => {
                return Err(SnippetError::Config(format!(
                    "Unknown config key: {} (known keys: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

/// Where things live on disk.
#[derive(Debug, Clone)]
pub struct SnippetPaths {
    pub config_dir: PathBuf,
    pub home_dir: PathBuf,
}

impl SnippetPaths {
    /// Database path, highest priority first: explicit override (the
    /// `SNIPPET_DB` variable), the config file, then `~/snippets.db`.
    pub fn db_path(&self, override_path: Option<PathBuf>, config: &SnippetConfig) -> PathBuf {
        override_path
            .or_else(|| config.db_path.clone())
            .unwrap_or_else(|| self.home_dir.join(DEFAULT_DB_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> SnippetPaths {
        SnippetPaths {
            config_dir: dir.path().join("config"),
            home_dir: dir.path().join("home"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = SnippetConfig::default();
        assert_eq!(config.db_path, None);
        assert_eq!(config.busy_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = SnippetConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, SnippetConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = SnippetConfig::default();
        config.set("busy-timeout", "250").unwrap();
        config.set("db-path", "/tmp/elsewhere.db").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = SnippetConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.busy_timeout_ms, 250);
        assert_eq!(loaded.db_path, Some(PathBuf::from("/tmp/elsewhere.db")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = SnippetConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, SnippetConfig::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            SnippetConfig::load(dir.path()),
            Err(SnippetError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = SnippetConfig::default();
        assert!(config.set("busy-timeout", "soon").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, SnippetConfig::default());
    }

    #[test]
    fn test_empty_db_path_resets() {
        let mut config = SnippetConfig::default();
        config.set("db-path", "/x.db").unwrap();
        config.set("db-path", "").unwrap();
        assert_eq!(config.db_path, None);
        assert_eq!(config.get("db-path").as_deref(), Some(""));
    }

    #[test]
    fn test_db_path_priority() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        let mut config = SnippetConfig::default();

        assert_eq!(
            paths.db_path(None, &config),
            dir.path().join("home").join("snippets.db")
        );

        config.db_path = Some(PathBuf::from("/from/config.db"));
        assert_eq!(paths.db_path(None, &config), PathBuf::from("/from/config.db"));

        assert_eq!(
            paths.db_path(Some(PathBuf::from("/from/env.db")), &config),
            PathBuf::from("/from/env.db")
        );
    }
}
