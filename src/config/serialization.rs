//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# prompt-guide configuration
# Environment variables override these values:
#   PROMPT_GUIDE_THEME, PROMPT_GUIDE_COPY_FEEDBACK_MS, PROMPT_GUIDE_NO_MOUSE

# Color theme: "auto", "dracula", "nord", "light"
theme = {theme}

# Redraw interval (milliseconds)
tick_rate_ms = {tick_rate_ms}

# How long the "Copied!" indicator stays visible (milliseconds)
copy_feedback_ms = {copy_feedback_ms}

# Click tabs, card headers and the copy button with the mouse
mouse = {mouse}

[logging]
# trace, debug, info, warn, error (RUST_LOG takes precedence)
level = {level}
# Also write JSON logs to disk
file_enabled = {file_enabled}
file_dir = {file_dir}
# hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = {file_prefix}
"#,
            theme = quoted(&self.theme),
            tick_rate_ms = self.tick_rate_ms,
            copy_feedback_ms = self.copy_feedback_ms,
            mouse = self.mouse,
            level = quoted(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = quoted(&self.logging.file_dir.display().to_string()),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}

/// TOML string literal with quotes and backslashes escaped
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
