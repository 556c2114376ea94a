// Prompt Guide - prompt engineering reference for creative professionals
//
// A terminal rendition of a three-section guide (Foundation, Advanced
// Techniques, Creative Workshop) made of collapsible cards, one of which
// offers a copyable creative-brief template.
//
// Architecture:
// - Guide: static content plus the pure view state (active section,
//   expanded cards, copy feedback)
// - TUI (ratatui): renders the guide and turns input into state transitions
// - Clipboard (arboard) and feedback timer (tokio): the two side effects
// - Logging (tracing): captured into an in-app panel, optionally to files

mod cli;
mod config;
mod guide;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show/--path/--reset, outline)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;

    // Logs are captured into a buffer so they never garble the display.
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("prompt_guide={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let (file_layer, _file_guard) = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let file_appender = config.logging.file_appender();
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    tracing::debug!(
        theme = %config.theme,
        copy_feedback_ms = config.copy_feedback_ms,
        mouse = config.mouse,
        "Configuration loaded"
    );

    if let Err(e) = tui::run_tui(config, log_buffer).await {
        tracing::error!("TUI error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
