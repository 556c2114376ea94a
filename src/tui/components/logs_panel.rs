// Logs panel component
//
// Shows the most recent diagnostics captured by the tracing layer, newest at
// the bottom. Toggled with `l`.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Last module path segment, e.g. `prompt_guide::tui::app` -> `app`
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" Logs ({}) ", app.log_buffer.len()));
    let inner = block.inner(area);

    let lines: Vec<Line> = app
        .log_buffer
        .recent(inner.height as usize)
        .into_iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => theme.bad,
                LogLevel::Warn => theme.tip,
                LogLevel::Info => theme.good,
                LogLevel::Debug | LogLevel::Trace => theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(format!("{:<5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(
                    format!("{}: ", short_target(&entry.target)),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(entry.message, Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_shortened_to_module_name() {
        assert_eq!(short_target("prompt_guide::tui::app"), "app");
        assert_eq!(short_target("prompt_guide"), "prompt_guide");
    }
}
