// Views module - screen-level rendering
//
// The guide has a single screen:
//
//   title bar
//   tab bar
//   section banner
//   card list            (+ logs panel when toggled)
//   status bar
//
// `draw` is called on every frame. It reads state only, except for the
// click targets and list scroll offset it writes back into `App`.

use super::app::App;
use crate::tui::components::{
    card_list, logs_panel, section_banner, status_bar, tab_bar, title_bar,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the log panel when visible
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.hit_map.clear();

    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // title
            Constraint::Length(3),           // tabs
            Constraint::Length(2),           // section banner
            Constraint::Min(5),              // cards
            Constraint::Length(logs_height), // logs
            Constraint::Length(1),           // status
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    tab_bar::render(f, chunks[1], app);
    section_banner::render(f, chunks[2], app);
    card_list::render(f, chunks[3], app);
    if app.show_logs {
        logs_panel::render(f, chunks[4], app);
    }
    status_bar::render(f, chunks[5], app);
}
