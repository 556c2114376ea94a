// Status bar component
//
// Key hints on the left (the copy key only when it applies), the copy
// feedback indicator on the right.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const COPIED_LABEL: &str = "✓ Copied! ";

/// Key hints, trimmed on narrow terminals
fn hints(bp: Breakpoint) -> &'static str {
    match bp {
        Breakpoint::Compact => " 1-3 tab │ ⏎ open │ q quit",
        Breakpoint::Normal => " 1-3/Tab section │ ↑↓ card │ ⏎ open │ PgDn scroll │ q quit",
        Breakpoint::Wide => {
            " 1-3/Tab section │ ↑↓/jk card │ ⏎/Space open/close │ PgUp/PgDn scroll │ l logs │ q quit"
        }
    }
}

/// Extra hint while the focused card's template can be copied
fn copy_hint(bp: Breakpoint) -> &'static str {
    match bp {
        Breakpoint::Compact => " │ y copy",
        _ => " │ y copy template",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(COPIED_LABEL.chars().count() as u16 + 1),
        ])
        .split(area);

    let mut spans = vec![Span::styled(hints(bp), Style::default().fg(app.theme.muted))];
    if app.can_copy_focused() {
        spans.push(Span::styled(
            copy_hint(bp),
            Style::default().fg(app.theme.highlight),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    if app.state.copy_feedback_shown() {
        f.render_widget(
            Paragraph::new(Span::styled(
                COPIED_LABEL,
                Style::default()
                    .fg(app.theme.copied)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(ratatui::layout::Alignment::Right),
            chunks[1],
        );
    }
}
