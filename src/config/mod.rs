//! Configuration for the guide
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/prompt-guide/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long the "copied" indicator stays up after the last successful copy
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

/// Redraw interval
pub const DEFAULT_TICK_RATE_MS: u64 = 200;

pub const DEFAULT_THEME: &str = "auto";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "light"
    pub theme: String,

    /// Redraw tick interval in milliseconds
    pub tick_rate_ms: u64,

    /// Copy feedback duration in milliseconds
    pub copy_feedback_ms: u64,

    /// Capture mouse clicks for tabs, card headers and the copy button
    pub mouse: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            mouse: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure, every key optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub tick_rate_ms: Option<u64>,
    pub copy_feedback_ms: Option<u64>,
    pub mouse: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/prompt-guide/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("prompt-guide").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read and parse a config file. A missing file yields defaults.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).with_context(|| {
                format!(
                    "Failed to parse config file {} (check quotes, booleans and section names)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    ///
    /// A config file that exists but does not parse is an error rather than a
    /// silent fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with environment overrides
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("PROMPT_GUIDE_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Copy feedback: env > file > default
        let copy_feedback_ms = env("PROMPT_GUIDE_COPY_FEEDBACK_MS")
            .and_then(|v| v.parse().ok())
            .or(file.copy_feedback_ms)
            .unwrap_or(defaults.copy_feedback_ms);

        // Tick rate: file > default, never zero
        let tick_rate_ms = file
            .tick_rate_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.tick_rate_ms);

        // Mouse capture: env kill switch > file > default
        let mouse = match env("PROMPT_GUIDE_NO_MOUSE") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => false,
            _ => file.mouse.unwrap_or(defaults.mouse),
        };

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            tick_rate_ms,
            copy_feedback_ms,
            mouse,
            logging,
        }
    }

    pub fn copy_feedback_delay(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
