// TUI application state
//
// `App` is the controller: it owns the guide state, turns input into state
// transitions, performs the clipboard write and schedules feedback resets.
// Rendering reads from it and records click targets, the list viewport and
// the scroll offset back into it.

use super::clipboard::ClipboardSink;
use super::feedback::FeedbackTimer;
use super::input::{action_for, Action, InputHandler};
use super::layout::{HitMap, HitTarget};
use crate::config::Config;
use crate::guide::{Card, FeedbackTicket, GuideEvent, GuideState, Section, SectionId};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// Lines moved per mouse wheel notch
const WHEEL_LINES: usize = 3;

/// Main application state for the TUI
pub struct App {
    /// Active section, expanded cards, copy feedback
    pub state: GuideState,

    /// Keyboard focus per section (index into that section's cards)
    cursors: [usize; 3],

    /// First visible line of the card list, maintained by the renderer
    pub scroll: usize,

    /// When set, the renderer scrolls to keep the focused card visible.
    /// Cleared by line scrolling (wheel, PageUp/PageDown).
    pub follow_focus: bool,

    /// Card list viewport height from the last frame
    pub list_height: usize,

    /// Click targets from the last frame
    pub hit_map: HitMap,

    pub theme: Theme,

    /// Diagnostics shown in the log panel
    pub log_buffer: LogBuffer,

    pub show_logs: bool,

    pub should_quit: bool,

    input_handler: InputHandler,
    clipboard: Box<dyn ClipboardSink>,
    feedback: FeedbackTimer,
}

impl App {
    pub fn new(
        config: &Config,
        log_buffer: LogBuffer,
        clipboard: Box<dyn ClipboardSink>,
        feedback: FeedbackTimer,
    ) -> Self {
        Self {
            state: GuideState::new(),
            cursors: [0; 3],
            scroll: 0,
            follow_focus: true,
            list_height: 0,
            hit_map: HitMap::default(),
            theme: Theme::by_name(&config.theme),
            log_buffer,
            show_logs: false,
            should_quit: false,
            input_handler: InputHandler::default(),
            clipboard,
            feedback,
        }
    }

    /// Run one guide transition
    fn dispatch(&mut self, event: GuideEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    // ─── Queries ────────────────────────────────────────────────────────────

    pub fn active_section(&self) -> &'static Section {
        self.state.active_section.section()
    }

    /// Index of the focused card in the active section
    pub fn cursor(&self) -> usize {
        self.cursors[self.state.active_section.index()]
    }

    pub fn focused_card(&self) -> Option<&'static Card> {
        self.active_section().cards.get(self.cursor())
    }

    /// True when the copy key would do something right now
    pub fn can_copy_focused(&self) -> bool {
        self.focused_card()
            .is_some_and(|card| card.copy_template.is_some() && self.state.is_expanded(card.id))
    }

    // ─── Section selector ───────────────────────────────────────────────────

    pub fn select_section(&mut self, id: SectionId) {
        if self.state.active_section != id {
            tracing::debug!(section = id.as_str(), "Section selected");
            self.scroll = 0;
            self.follow_focus = true;
        }
        self.dispatch(GuideEvent::SelectSection(id));
    }

    // ─── Card cursor and expansion ─────────────────────────────────────────

    fn set_cursor(&mut self, index: usize) {
        let last = self.active_section().cards.len().saturating_sub(1);
        self.cursors[self.state.active_section.index()] = index.min(last);
        self.follow_focus = true;
    }

    pub fn cursor_up(&mut self) {
        self.set_cursor(self.cursor().saturating_sub(1));
    }

    /// Past the last card, keep going line by line so its body and the
    /// closing banner can be reached.
    pub fn cursor_down(&mut self) {
        if self.cursor() + 1 >= self.active_section().cards.len() {
            self.scroll_down(1);
        } else {
            self.set_cursor(self.cursor() + 1);
        }
    }

    pub fn toggle_card_at(&mut self, index: usize) {
        let Some(card) = self.active_section().cards.get(index) else {
            return;
        };
        self.set_cursor(index);
        self.dispatch(GuideEvent::ToggleCard(card.id.to_string()));
        tracing::debug!(
            card = card.id,
            expanded = self.state.is_expanded(card.id),
            open_cards = self.state.expanded_count(),
            "Card toggled"
        );
    }

    pub fn toggle_focused_card(&mut self) {
        self.toggle_card_at(self.cursor());
    }

    // ─── Line scrolling ─────────────────────────────────────────────────────

    /// The renderer clamps the offset to the content height
    pub fn scroll_down(&mut self, lines: usize) {
        self.follow_focus = false;
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.follow_focus = false;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn page(&self) -> usize {
        self.list_height.saturating_sub(1).max(1)
    }

    // ─── Copy feedback ─────────────────────────────────────────────────────

    /// Write `text` to the clipboard.
    ///
    /// Success raises the copied flag and schedules its reset. Failure is
    /// logged and leaves every piece of state untouched.
    pub fn copy_template(&mut self, text: &str) -> bool {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                self.dispatch(GuideEvent::CopySucceeded);
                let ticket = self.state.feedback_ticket();
                self.feedback.schedule(ticket);
                tracing::info!(
                    bytes = text.len(),
                    generation = ticket.generation(),
                    "Template copied to clipboard"
                );
                true
            }
            Err(e) => {
                tracing::warn!("Failed to copy text: {:#}", e);
                false
            }
        }
    }

    /// Copy the template of the card at `index`, if it has one and is open
    pub fn copy_card_template(&mut self, index: usize) -> bool {
        let Some(card) = self.active_section().cards.get(index) else {
            return false;
        };
        let Some(template) = card.copy_template else {
            return false;
        };
        if !self.state.is_expanded(card.id) {
            return false;
        }
        self.set_cursor(index);
        self.copy_template(template)
    }

    pub fn copy_focused_template(&mut self) -> bool {
        self.copy_card_template(self.cursor())
    }

    /// Called by the event loop when a feedback timer fires
    pub fn expire_copy_feedback(&mut self, ticket: FeedbackTicket) {
        if ticket != self.state.feedback_ticket() {
            tracing::trace!(
                generation = ticket.generation(),
                "Superseded copy feedback reset ignored"
            );
        }
        self.dispatch(GuideEvent::CopyFeedbackExpired(ticket));
    }

    // ─── Input dispatch ────────────────────────────────────────────────────

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectSection(id) => self.select_section(id),
            Action::NextSection => self.select_section(self.state.active_section.next()),
            Action::PrevSection => self.select_section(self.state.active_section.prev()),
            Action::CursorUp => self.cursor_up(),
            Action::CursorDown => self.cursor_down(),
            Action::CursorFirst => self.set_cursor(0),
            Action::CursorLast => self.set_cursor(usize::MAX),
            Action::PageUp => self.scroll_up(self.page()),
            Action::PageDown => self.scroll_down(self.page()),
            Action::ToggleCard => self.toggle_focused_card(),
            Action::CopyTemplate => {
                self.copy_focused_template();
            }
            Action::ToggleLogs => self.show_logs = !self.show_logs,
        }
    }

    /// Keyboard input: every press acts, auto-repeat only for navigation
    pub fn handle_key(&mut self, key: KeyEvent) {
        let fire = match key.kind {
            KeyEventKind::Press => {
                self.input_handler.handle_key_press(key.code);
                true
            }
            KeyEventKind::Repeat => self.input_handler.handle_key_repeat(key.code),
            KeyEventKind::Release => {
                self.input_handler.handle_key_release(key.code);
                false
            }
        };
        if fire {
            if let Some(action) = action_for(&key) {
                self.perform(action);
            }
        }
    }

    /// Mouse input: clicks activate whatever was drawn under the pointer,
    /// the wheel scrolls the card list
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_map.target_at(mouse.column, mouse.row) {
                    Some(HitTarget::Tab(id)) => self.select_section(id),
                    Some(HitTarget::CardHeader(index)) => self.toggle_card_at(index),
                    Some(HitTarget::CopyButton(index)) => {
                        self.copy_card_template(index);
                    }
                    None => {}
                }
            }
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_LINES),
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_LINES),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::content::CREATIVE_BRIEF_TEMPLATE;
    use crate::tui::clipboard::fake::FakeClipboard;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn app_with(clipboard: FakeClipboard) -> (App, UnboundedReceiver<FeedbackTicket>) {
        let (timer, rx) = FeedbackTimer::new(Duration::from_millis(2000));
        let app = App::new(
            &Config::default(),
            LogBuffer::new(),
            Box::new(clipboard),
            timer,
        );
        (app, rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_of_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn wheel(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Open the workshop tab with the creative brief expanded
    fn open_creative_brief(app: &mut App) {
        app.select_section(SectionId::Workshop);
        app.toggle_card_at(0);
        assert_eq!(app.focused_card().map(|c| c.id), Some("creative-brief"));
    }

    #[test]
    fn starts_on_foundation_with_first_card_focused() {
        let (app, _rx) = app_with(FakeClipboard::default());
        assert_eq!(app.state.active_section, SectionId::Foundation);
        assert_eq!(app.focused_card().map(|c| c.id), Some("framework"));
        assert!(!app.state.copy_feedback_shown());
    }

    #[test]
    fn keys_drive_sections_and_cards() {
        let (mut app, _rx) = app_with(FakeClipboard::default());

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.state.active_section, SectionId::Advanced);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.state.is_expanded("few-shot"));
        assert!(!app.state.is_expanded("chain-thought"));

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state.active_section, SectionId::Workshop);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn held_toggle_key_fires_once() {
        let (mut app, _rx) = app_with(FakeClipboard::default());
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key_of_kind(KeyCode::Enter, KeyEventKind::Repeat));
        app.handle_key(key_of_kind(KeyCode::Enter, KeyEventKind::Repeat));
        assert!(app.state.is_expanded("framework"));

        app.handle_key(key_of_kind(KeyCode::Enter, KeyEventKind::Release));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.state.is_expanded("framework"));
    }

    #[test]
    fn separate_taps_without_release_all_count() {
        // Most terminals never send Release events
        let (mut app, _rx) = app_with(FakeClipboard::default());

        app.handle_key(key(KeyCode::Down));
        std::thread::sleep(Duration::from_millis(200));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.cursor(), 2);

        app.handle_key(key(KeyCode::Enter));
        std::thread::sleep(Duration::from_millis(100));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.state.is_expanded("iteration"));

        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.state.is_expanded("iteration"));
    }

    #[test]
    fn wheel_and_page_keys_scroll_without_moving_cursor() {
        let (mut app, _rx) = app_with(FakeClipboard::default());
        app.list_height = 10;

        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.scroll, WHEEL_LINES);
        assert!(!app.follow_focus);
        assert_eq!(app.cursor(), 0);

        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.scroll, WHEEL_LINES + 9);

        app.handle_key(key(KeyCode::PageUp));
        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.scroll, 0);

        // Moving the cursor hands scrolling back to the focused card
        app.handle_key(key(KeyCode::Down));
        assert!(app.follow_focus);
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn cursor_down_past_last_card_scrolls_lines() {
        let (mut app, _rx) = app_with(FakeClipboard::default());
        app.perform(Action::CursorLast);
        let before = app.scroll;

        app.perform(Action::CursorDown);
        app.perform(Action::CursorDown);
        assert_eq!(app.cursor(), 2);
        assert_eq!(app.scroll, before + 2);
        assert!(!app.follow_focus);

        app.perform(Action::CursorUp);
        assert_eq!(app.cursor(), 1);
        assert!(app.follow_focus);
    }

    #[test]
    fn copy_availability_follows_focus_and_expansion() {
        let (mut app, _rx) = app_with(FakeClipboard::default());
        assert!(!app.can_copy_focused());

        app.select_section(SectionId::Workshop);
        assert!(!app.can_copy_focused());
        app.toggle_focused_card();
        assert!(app.can_copy_focused());

        app.cursor_down();
        assert!(!app.can_copy_focused());
    }

    #[test]
    fn cursor_is_clamped_and_remembered_per_section() {
        let (mut app, _rx) = app_with(FakeClipboard::default());
        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.cursor(), 2);

        app.select_section(SectionId::Advanced);
        assert_eq!(app.cursor(), 0);
        app.cursor_up();
        assert_eq!(app.cursor(), 0);

        app.select_section(SectionId::Foundation);
        assert_eq!(app.focused_card().map(|c| c.id), Some("iteration"));
    }

    #[test]
    fn switching_sections_keeps_expansion() {
        let (mut app, _rx) = app_with(FakeClipboard::default());
        app.toggle_card_at(1);
        app.perform(Action::NextSection);
        app.toggle_card_at(2);
        app.perform(Action::PrevSection);

        assert!(app.state.is_expanded("quality"));
        assert!(app.state.is_expanded("meta-prompting"));
        assert_eq!(app.state.expanded_count(), 2);
    }

    #[tokio::test]
    async fn successful_copy_sets_feedback_and_writes_template() {
        let clipboard = FakeClipboard::default();
        let (mut app, _rx) = app_with(clipboard.clone());
        open_creative_brief(&mut app);

        assert!(app.copy_focused_template());
        assert!(app.state.copy_feedback_shown());
        assert_eq!(clipboard.text().as_deref(), Some(CREATIVE_BRIEF_TEMPLATE));
    }

    #[tokio::test]
    async fn failed_copy_leaves_state_unchanged() {
        let (mut app, _rx) = app_with(FakeClipboard::denied());
        open_creative_brief(&mut app);
        let before = app.state.clone();

        assert!(!app.copy_focused_template());
        assert_eq!(app.state, before);
        assert!(!app.state.copy_feedback_shown());
    }

    #[tokio::test]
    async fn failed_copy_keeps_earlier_feedback() {
        let clipboard = FakeClipboard::default();
        let (mut app, _rx) = app_with(clipboard);
        open_creative_brief(&mut app);
        assert!(app.copy_focused_template());

        app.clipboard = Box::new(FakeClipboard::denied());
        assert!(!app.copy_focused_template());
        assert!(app.state.copy_feedback_shown());
        assert_eq!(app.state.copy_feedback.generation, 1);
    }

    #[tokio::test]
    async fn copy_requires_an_open_card_with_template() {
        let clipboard = FakeClipboard::default();
        let (mut app, _rx) = app_with(clipboard.clone());

        // Foundation cards have no template
        app.toggle_focused_card();
        assert!(!app.copy_focused_template());

        // Creative brief closed: nothing to click
        app.select_section(SectionId::Workshop);
        assert!(!app.copy_focused_template());
        assert!(clipboard.text().is_none());
        assert!(!app.state.copy_feedback_shown());
    }

    #[tokio::test(start_paused = true)]
    async fn feedback_clears_after_delay() {
        let (mut app, mut rx) = app_with(FakeClipboard::default());
        open_creative_brief(&mut app);
        app.handle_key(key(KeyCode::Char('y')));
        assert!(app.state.copy_feedback_shown());

        let ticket = rx.recv().await.unwrap();
        app.expire_copy_feedback(ticket);
        assert!(!app.state.copy_feedback_shown());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_copies_are_not_cut_short() {
        let (mut app, mut rx) = app_with(FakeClipboard::default());
        open_creative_brief(&mut app);

        assert!(app.copy_focused_template());
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(app.copy_focused_template());

        let first = rx.recv().await.unwrap();
        app.expire_copy_feedback(first);
        assert!(app.state.copy_feedback_shown());

        let second = rx.recv().await.unwrap();
        app.expire_copy_feedback(second);
        assert!(!app.state.copy_feedback_shown());
    }

    #[tokio::test]
    async fn clicks_follow_the_hit_map() {
        let clipboard = FakeClipboard::default();
        let (mut app, _rx) = app_with(clipboard.clone());
        app.hit_map
            .push(Rect::new(0, 0, 12, 1), HitTarget::Tab(SectionId::Workshop));
        app.hit_map.push(Rect::new(0, 5, 40, 1), HitTarget::CardHeader(0));
        app.hit_map.push(Rect::new(0, 9, 40, 1), HitTarget::CopyButton(0));

        app.handle_mouse(click(4, 0));
        assert_eq!(app.state.active_section, SectionId::Workshop);

        app.handle_mouse(click(10, 5));
        assert!(app.state.is_expanded("creative-brief"));

        app.handle_mouse(click(10, 9));
        assert!(app.state.copy_feedback_shown());
        assert!(clipboard.text().is_some());

        // Empty space does nothing
        app.handle_mouse(click(60, 20));
        assert!(app.state.is_expanded("creative-brief"));
    }
}
