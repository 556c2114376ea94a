// Card list component
//
// Renders the active section's cards (header + optional body), followed by
// the call-to-action banner. Keeps the focused card in view unless the user
// scrolled by lines, and registers click targets for headers and the copy
// button.

use super::card_body::{self, BODY_INDENT};
use crate::guide::content::CALL_TO_ACTION;
use crate::tui::app::App;
use crate::tui::layout::{scroll_to_show, HitTarget};
use crate::tui::text::wrap;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let section = app.active_section();
    let accent = app.theme.section_color(section.id);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let copied = app.state.copy_feedback_shown();
    let cursor = app.cursor();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut targets: Vec<(usize, HitTarget)> = Vec::new();
    let mut focus_span = (0, 0);

    for (i, card) in section.cards.iter().enumerate() {
        let expanded = app.state.is_expanded(card.id);
        let focused = i == cursor;
        let start = lines.len();

        let chevron = if expanded { "▾" } else { "▸" };
        let mut header_style = Style::default()
            .fg(app.theme.foreground)
            .add_modifier(Modifier::BOLD);
        if focused {
            header_style = header_style
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection);
        }
        let marker = if focused { "›" } else { " " };
        targets.push((lines.len(), HitTarget::CardHeader(i)));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), Style::default().fg(accent)),
            Span::styled(format!("{} ", chevron), Style::default().fg(accent)),
            Span::styled(card.title.to_string(), header_style),
        ]));

        if expanded {
            let body = card_body::render(card, width, accent, &app.theme, copied);
            if let Some(offset) = body.copy_button {
                targets.push((lines.len() + offset, HitTarget::CopyButton(i)));
            }
            lines.extend(body.lines);
        }

        if focused {
            focus_span = (start, lines.len());
        }
        lines.push(Line::default());
    }

    push_call_to_action(&mut lines, width, app);

    let height = inner.height as usize;
    app.list_height = height;
    if app.follow_focus {
        app.scroll = scroll_to_show(app.scroll, focus_span.0, focus_span.1, height, lines.len());
    }
    app.scroll = app.scroll.min(lines.len().saturating_sub(height));

    for (line, target) in targets {
        if line >= app.scroll && line < app.scroll + height {
            let row = inner.y + (line - app.scroll) as u16;
            app.hit_map
                .push(Rect::new(inner.x, row, inner.width, 1), target);
        }
    }

    let visible: Vec<Line<'static>> = lines.into_iter().skip(app.scroll).take(height).collect();
    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(app.theme.foreground)),
        inner,
    );
}

/// Closing banner, same under every section
fn push_call_to_action(lines: &mut Vec<Line<'static>>, width: usize, app: &App) {
    let accent = app.theme.section_color(app.state.active_section);
    let rule = "─".repeat(width.saturating_sub(BODY_INDENT.len() * 2));

    lines.push(Line::styled(rule.clone(), Style::default().fg(app.theme.border)).centered());
    lines.push(
        Line::styled(
            CALL_TO_ACTION.title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
        .centered(),
    );
    for line in wrap(CALL_TO_ACTION.subtitle, width.max(1)) {
        lines.push(Line::styled(line, Style::default().fg(app.theme.muted)).centered());
    }
    let chips: Vec<String> = CALL_TO_ACTION
        .chips
        .iter()
        .map(|c| format!("( {} )", c))
        .collect();
    for line in wrap(&chips.join("  "), width.max(1)) {
        lines.push(Line::styled(line, Style::default().fg(accent)).centered());
    }
    lines.push(Line::styled(rule, Style::default().fg(app.theme.border)).centered());
}
