// Section banner: active section title in its accent color plus the blurb

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let section = app.active_section();
    let accent = app.theme.section_color(section.id);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", section.icon), Style::default().fg(accent)),
            Span::styled(
                section.title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", section.description),
            Style::default().fg(app.theme.muted),
        )),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
