// Title bar component
//
// Renders the guide title and subtitle at the top of the screen.

use crate::guide::content::{APP_SUBTITLE, APP_TITLE};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::raw(" ✨ "),
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        spans.push(Span::styled(
            format!("  {}", APP_SUBTITLE),
            Style::default().fg(app.theme.muted),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.title)),
    );

    f.render_widget(title, area);
}
