// Tab bar component
//
// One tab per section. Drawn span by span (rather than with the `Tabs`
// widget) so each tab's column range can be registered as a click target.

use crate::guide::SECTIONS;
use crate::tui::app::App;
use crate::tui::layout::{Breakpoint, HitTarget};
use crate::tui::text::display_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DIVIDER: &str = "│";

/// Label for a tab at the given breakpoint, e.g. " 2 ⚡ Advanced Techniques "
fn tab_label(index: usize, bp: Breakpoint) -> String {
    let section = &SECTIONS[index];
    match bp {
        Breakpoint::Compact => format!(" {} {} ", index + 1, section.short_title),
        _ => format!(" {} {} {} ", index + 1, section.icon, section.title),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bp = Breakpoint::from_width(area.width);
    let mut spans = Vec::new();
    let mut x = inner.x;

    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(DIVIDER, Style::default().fg(app.theme.border)));
            x = x.saturating_add(display_width(DIVIDER) as u16);
        }

        let label = tab_label(i, bp);
        let width = display_width(&label) as u16;
        let style = if app.state.is_active(section.id) {
            Style::default()
                .fg(app.theme.section_color(section.id))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.muted)
        };

        let visible = width.min(inner.right().saturating_sub(x));
        app.hit_map.push(
            Rect::new(x, inner.y, visible, 1),
            HitTarget::Tab(section.id),
        );

        spans.push(Span::styled(label, style));
        x = x.saturating_add(width);
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_shrink_on_compact_terminals() {
        assert_eq!(tab_label(1, Breakpoint::Compact), " 2 Advanced ");
        assert_eq!(tab_label(1, Breakpoint::Wide), " 2 ⚡ Advanced Techniques ");
    }
}
