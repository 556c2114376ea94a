// Card body rendering
//
// Turns a card's content blocks into styled, pre-wrapped lines. Wrapping
// happens here (not in Paragraph) so the card list knows exactly which line
// every header and button lands on.

use crate::guide::{Block, Card};
use crate::theme::Theme;
use crate::tui::text::wrap;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Left margin of body text under the card header
pub const BODY_INDENT: &str = "    ";

/// Rendered card body
pub struct CardBody {
    pub lines: Vec<Line<'static>>,
    /// Line index (within `lines`) of the copy button, if the card has one
    pub copy_button: Option<usize>,
}

/// Render every block of `card` for a viewport `width` cells wide
pub fn render(card: &Card, width: usize, accent: Color, theme: &Theme, copied: bool) -> CardBody {
    let inner = width.saturating_sub(BODY_INDENT.len()).max(10);
    let mut out = BodyWriter {
        lines: Vec::new(),
        copy_button: None,
    };

    for (i, block) in card.body.iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        render_block(&mut out, block, inner, accent, theme, copied);
    }

    CardBody {
        lines: out.lines,
        copy_button: out.copy_button,
    }
}

struct BodyWriter {
    lines: Vec<Line<'static>>,
    copy_button: Option<usize>,
}

impl BodyWriter {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Span::raw(BODY_INDENT)];
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Wrapped text, `prefix` on the first line and matching padding after
    fn wrapped(&mut self, prefix: &str, text: &str, width: usize, prefix_style: Style, style: Style) {
        let pad = " ".repeat(crate::tui::text::display_width(prefix));
        let body_width = width.saturating_sub(pad.len()).max(1);
        for (i, line) in wrap(text, body_width).into_iter().enumerate() {
            let lead = if i == 0 { prefix.to_string() } else { pad.clone() };
            self.push(vec![
                Span::styled(lead, prefix_style),
                Span::styled(line, style),
            ]);
        }
    }
}

fn render_block(
    out: &mut BodyWriter,
    block: &Block,
    width: usize,
    accent: Color,
    theme: &Theme,
    copied: bool,
) {
    let text = Style::default().fg(theme.foreground);
    let muted = Style::default().fg(theme.muted);
    let bold = text.add_modifier(Modifier::BOLD);

    match *block {
        Block::Lead(t) => out.wrapped("", t, width, muted, muted),
        Block::Formula(t) => {
            let style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
            for line in wrap(t, width) {
                out.lines.push(Line::styled(line, style).centered());
            }
        }
        Block::Heading(t) => out.push(vec![Span::styled(t.to_string(), bold)]),
        Block::Labeled {
            label,
            detail,
            example,
        } => {
            out.wrapped(
                &format!("{}  ", label),
                detail,
                width,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
                text,
            );
            if let Some(example) = example {
                out.wrapped("   ", example, width, muted, muted.add_modifier(Modifier::ITALIC));
            }
        }
        Block::Compare {
            bad_label,
            bad,
            good_label,
            good,
        } => {
            out.push(vec![Span::styled(
                bad_label.to_string(),
                Style::default().fg(theme.bad).add_modifier(Modifier::BOLD),
            )]);
            out.wrapped("  ", bad, width, text, Style::default().fg(theme.bad));
            out.blank();
            out.push(vec![Span::styled(
                good_label.to_string(),
                Style::default().fg(theme.good).add_modifier(Modifier::BOLD),
            )]);
            out.wrapped("  ", good, width, text, Style::default().fg(theme.good));
        }
        Block::Flow(steps) => {
            let joined = steps.join(" → ");
            out.wrapped("", &joined, width, text, Style::default().fg(accent));
        }
        Block::Steps(steps) => {
            for (n, step) in steps.iter().enumerate() {
                out.wrapped(
                    &format!("({}) ", n + 1),
                    step,
                    width,
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    text,
                );
            }
        }
        Block::Code { title, lines } => {
            if let Some(title) = title {
                out.push(vec![Span::styled(
                    title.to_string(),
                    Style::default().fg(theme.tip).add_modifier(Modifier::BOLD),
                )]);
            }
            for line in lines {
                out.wrapped("│ ", line, width, muted, Style::default().fg(theme.code));
            }
        }
        Block::Callout { label, text: body } => {
            out.wrapped(
                &format!("▌ {} ", label),
                body,
                width,
                Style::default().fg(theme.tip).add_modifier(Modifier::BOLD),
                text,
            );
        }
        Block::Tags(tags) => {
            let chips: Vec<String> = tags.iter().map(|t| format!("[{}]", t)).collect();
            out.wrapped("", &chips.join(" "), width, text, Style::default().fg(accent));
        }
        Block::Template(rows) => {
            for (key, value) in rows {
                out.wrapped(
                    &format!("{} ", key),
                    value,
                    width,
                    Style::default().fg(theme.good).add_modifier(Modifier::BOLD),
                    Style::default().fg(theme.code),
                );
            }
        }
        Block::CopyButton => {
            let button = if copied {
                Span::styled(
                    "[ ✓ Copied! ]",
                    Style::default()
                        .fg(theme.copied)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    "[ ⧉ Copy (y) ]",
                    Style::default().fg(theme.highlight),
                )
            };
            out.copy_button = Some(out.lines.len());
            out.push(vec![
                Span::styled("Copy template to clipboard  ", muted),
                button,
            ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::find_card;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn copy_button_line_is_reported() {
        let card = find_card("creative-brief").unwrap();
        let theme = Theme::default();
        let body = render(card, 80, theme.section_workshop, &theme, false);

        let idx = body.copy_button.expect("creative brief has a copy button");
        assert!(plain(&body.lines[idx]).contains("Copy (y)"));

        let copied = render(card, 80, theme.section_workshop, &theme, true);
        assert!(plain(&copied.lines[idx]).contains("✓ Copied!"));
    }

    #[test]
    fn cards_without_template_have_no_button() {
        let theme = Theme::default();
        let body = render(find_card("framework").unwrap(), 80, Color::Cyan, &theme, true);
        assert!(body.copy_button.is_none());
        assert!(body.lines.iter().all(|l| !plain(l).contains("Copied")));
    }

    #[test]
    fn narrow_width_wraps_more() {
        let theme = Theme::default();
        let card = find_card("quality").unwrap();
        let wide = render(card, 120, Color::Cyan, &theme, false);
        let narrow = render(card, 40, Color::Cyan, &theme, false);
        assert!(narrow.lines.len() > wide.lines.len());
    }

    #[test]
    fn steps_are_numbered() {
        let theme = Theme::default();
        let body = render(find_card("chain-thought").unwrap(), 80, Color::Cyan, &theme, false);
        let text: Vec<String> = body.lines.iter().map(plain).collect();
        assert!(text.iter().any(|l| l.contains("(1) Define the problem")));
        assert!(text.iter().any(|l| l.contains("(4) Combine for answer")));
    }
}
