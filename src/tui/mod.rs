// TUI module - Terminal User Interface
//
// This module runs the guide in the terminal using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, copy feedback resets)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod feedback;
pub mod input;
pub mod layout;
pub mod text;
pub mod views;

use crate::config::Config;
use crate::guide::FeedbackTicket;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use clipboard::SystemClipboard;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feedback::FeedbackTimer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (timer, mut feedback_rx) = FeedbackTimer::new(config.copy_feedback_delay());
    let timer_delay = timer.delay();
    let mut app = App::new(&config, log_buffer, Box::new(SystemClipboard::default()), timer);
    tracing::info!(
        theme = %app.theme.name,
        copy_feedback_ms = timer_delay.as_millis() as u64,
        cards = crate::guide::all_cards().count(),
        "Guide started"
    );

    let result = run_event_loop(&mut terminal, &mut app, &mut feedback_rx, config.tick_rate()).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (periodic redraws, e.g. after a resize)
/// 3. Copy feedback tickets coming due
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    feedback_rx: &mut UnboundedReceiver<FeedbackTicket>,
    tick_rate: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick_rate);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => app.handle_key(key),
                        Ok(Event::Mouse(mouse)) => app.handle_mouse(mouse),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {}

            Some(ticket) = feedback_rx.recv() => {
                app.expire_copy_feedback(ticket);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
