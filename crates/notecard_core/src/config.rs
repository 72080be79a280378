//! Runtime configuration resolved from the environment.
//!
//! | Variable              | Meaning                         | Default                          |
//! |-----------------------|---------------------------------|----------------------------------|
//! | `NOTECARD_DB_PATH`    | SQLite database file            | `<temp_dir>/notecard.sqlite3`    |
//! | `NOTECARD_LOG_LEVEL`  | one of `trace` .. `error`       | `default_log_level()`            |
//! | `NOTECARD_LOG_DIR`    | absolute directory for log files | unset (file logging disabled)   |
//!
//! Blank values count as unset.

use crate::logging::{default_log_level, init_logging, parse_level};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "NOTECARD_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "NOTECARD_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "NOTECARD_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "notecard.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, applying defaults.
    ///
    /// # Errors
    /// Returns an error when the log level value is not recognized.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = value(LOG_LEVEL_ENV) {
            config.log_level = parse_level(&level)?;
        }
        config.log_dir = value(LOG_DIR_ENV).map(PathBuf::from);
        Ok(config)
    }

    /// Overrides the log level after validating it.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), String> {
        self.log_level = parse_level(level)?;
        Ok(())
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when no directory is set.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(dir) = self.log_dir.as_ref() else {
            return Ok(false);
        };
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: {}", dir.display()))?;
        init_logging(self.log_level, dir)?;
        Ok(true)
    }
}
