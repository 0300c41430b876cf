//! Runtime configuration for hosts embedding the profile core.
//!
//! # Responsibility
//! - Resolve database path and logging settings from the environment.
//! - Reject invalid settings before any storage or logging is touched.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "INSTIPROFILE_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "INSTIPROFILE_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "INSTIPROFILE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "instiprofile.sqlite3";

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDbPath,
    InvalidLogging {
        variable: &'static str,
        source: LoggingError,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDbPath => write!(f, "{DB_PATH_ENV} must not be empty"),
            Self::InvalidLogging { variable, source } => write!(f, "{variable}: {source}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyDbPath => None,
            Self::InvalidLogging { source, .. } => Some(source),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset
    /// variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_ENV) {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyDbPath);
            }
            config.db_path = PathBuf::from(path.trim());
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level =
                normalize_level(&level).map_err(|source| ConfigError::InvalidLogging {
                    variable: LOG_LEVEL_ENV,
                    source,
                })?;
        }

        if let Some(dir) = lookup(LOG_DIR_ENV) {
            let dir = normalize_log_dir(&dir).map_err(|source| ConfigError::InvalidLogging {
                variable: LOG_DIR_ENV,
                source,
            })?;
            config.log_dir = Some(dir);
        }

        Ok(config)
    }
}
