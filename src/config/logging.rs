//! `[logging]` section: filter level and optional JSON log files
//!
//! Every key is optional. Values that don't make sense fall back to the
//! default instead of failing startup; a bad log setting should never keep
//! the guide from opening.

use serde::Deserialize;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{self, RollingFileAppender};

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_LOG_DIR: &str = "./logs";
const DEFAULT_LOG_PREFIX: &str = "prompt-guide";

/// How often a new log file is started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl FromStr for LogRotation {
    type Err = Infallible;

    /// Unknown names mean daily
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        })
    }
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    /// File writer for `dir/prefix.<period>`
    pub fn appender(&self, dir: &Path, prefix: &str) -> RollingFileAppender {
        match self {
            Self::Hourly => rolling::hourly(dir, prefix),
            Self::Daily => rolling::daily(dir, prefix),
            Self::Never => rolling::never(dir, prefix),
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter for this crate's events; `RUST_LOG` overrides it
    pub level: String,
    /// Write JSON lines to disk besides the in-app panel
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_enabled: false,
            file_dir: PathBuf::from(DEFAULT_LOG_DIR),
            file_rotation: LogRotation::Daily,
            file_prefix: DEFAULT_LOG_PREFIX.to_string(),
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file
                .level
                .and_then(|l| normalize_level(&l))
                .unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(|d| expand_home(&d))
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .and_then(|r| r.parse().ok())
                .unwrap_or(defaults.file_rotation),
            file_prefix: file
                .file_prefix
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.file_prefix),
        }
    }

    pub fn file_appender(&self) -> RollingFileAppender {
        self.file_rotation.appender(&self.file_dir, &self.file_prefix)
    }
}

/// Lowercased level name, or None when `tracing` wouldn't accept it
fn normalize_level(level: &str) -> Option<String> {
    let level = level.trim().to_ascii_lowercase();
    level.parse::<LevelFilter>().ok().map(|_| level)
}

/// `~/logs` -> `$HOME/logs`
fn expand_home(dir: &str) -> PathBuf {
    match (dir.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_names_parse_loosely() {
        assert_eq!("Hourly".parse(), Ok(LogRotation::Hourly));
        assert_eq!(" never ".parse(), Ok(LogRotation::Never));
        assert_eq!("weekly".parse(), Ok(LogRotation::Daily));
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        let config = LoggingConfig::from_file(Some(FileLogging {
            level: Some("loud".into()),
            ..Default::default()
        }));
        assert_eq!(config.level, "info");

        let config = LoggingConfig::from_file(Some(FileLogging {
            level: Some("DEBUG".into()),
            ..Default::default()
        }));
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn blank_prefix_uses_default() {
        let config = LoggingConfig::from_file(Some(FileLogging {
            file_prefix: Some("  ".into()),
            ..Default::default()
        }));
        assert_eq!(config.file_prefix, DEFAULT_LOG_PREFIX);
    }

    #[test]
    fn home_relative_dir_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home("~/guide-logs"), home.join("guide-logs"));
        assert_eq!(expand_home("./logs"), PathBuf::from("./logs"));
    }
}
