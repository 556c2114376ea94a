// Input handling: key -> action mapping plus press/repeat debouncing
//
// - Every press triggers its action
// - Auto-repeat only re-triggers navigation keys, after an initial delay

use crate::guide::SectionId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Something the user asked the guide to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectSection(SectionId),
    NextSection,
    PrevSection,
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    /// Scroll the card list a page without moving the cursor
    PageUp,
    PageDown,
    ToggleCard,
    CopyTemplate,
    ToggleLogs,
}

/// Translate a key press into an action
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as usize) - ('1' as usize);
            Action::SelectSection(SectionId::from_index(index)?)
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Action::PrevSection,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('L') => Action::NextSection,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('H') => Action::PrevSection,
        KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
        KeyCode::Home | KeyCode::Char('g') => Action::CursorFirst,
        KeyCode::End | KeyCode::Char('G') => Action::CursorLast,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleCard,
        KeyCode::Char('y') | KeyCode::Char('c') => Action::CopyTemplate,
        KeyCode::Char('l') => Action::ToggleLogs,
        _ => return None,
    };
    Some(action)
}

/// How a key behaves while the terminal reports it as held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Fires once per press; auto-repeat is ignored
    StateChange,

    /// Fires on press, then again on auto-repeat after an initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(60),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

/// Rate-limits auto-repeat per key.
///
/// Most terminals never report key release, so a press can't be told apart
/// from a tap that follows a release. Every `Press` therefore fires; only
/// `Repeat` events go through the key's [`KeyBehavior`].
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Record a fresh press; restarts the key's repeat timing
    pub fn handle_key_press(&mut self, key: KeyCode) {
        let now = Instant::now();
        self.key_states.insert(
            key,
            KeyState {
                press_started: Some(now),
                last_triggered: Some(now),
            },
        );
    }

    /// Returns true if an auto-repeat of `key` should fire now
    pub fn handle_key_repeat(&mut self, key: KeyCode) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let KeyBehavior::Repeatable {
            initial_delay,
            repeat_interval,
        } = behavior
        else {
            return false;
        };

        let now = Instant::now();
        let state = self.key_states.entry(key).or_default();
        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            // Repeat without a recorded press: treat it as the press
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        };

        if now.duration_since(press_start) >= initial_delay
            && now.duration_since(last) >= repeat_interval
        {
            state.last_triggered = Some(now);
            return true;
        }
        false
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.key_states.remove(&key);
    }

    /// Navigation keys repeat, everything else fires once per press
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::navigation(),
        );
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_select_sections() {
        assert_eq!(
            action_for(&press(KeyCode::Char('1'))),
            Some(Action::SelectSection(SectionId::Foundation))
        );
        assert_eq!(
            action_for(&press(KeyCode::Char('3'))),
            Some(Action::SelectSection(SectionId::Workshop))
        );
        assert_eq!(action_for(&press(KeyCode::Char('4'))), None);
    }

    #[test]
    fn shift_tab_goes_back() {
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(action_for(&shift_tab), Some(Action::PrevSection));
        assert_eq!(action_for(&press(KeyCode::BackTab)), Some(Action::PrevSection));
        assert_eq!(action_for(&press(KeyCode::Tab)), Some(Action::NextSection));
    }

    #[test]
    fn page_keys_scroll() {
        assert_eq!(action_for(&press(KeyCode::PageDown)), Some(Action::PageDown));
        assert_eq!(action_for(&press(KeyCode::PageUp)), Some(Action::PageUp));
    }

    #[test]
    fn ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Char('c'))), Some(Action::CopyTemplate));
    }

    #[test]
    fn press_without_release_restarts_timing() {
        let mut handler = InputHandler::with_default_config();

        handler.handle_key_press(KeyCode::Down);
        thread::sleep(Duration::from_millis(20));
        assert!(!handler.handle_key_repeat(KeyCode::Down));

        // A second tap restarts timing instead of counting as a held key
        handler.handle_key_press(KeyCode::Down);
        thread::sleep(Duration::from_millis(20));
        assert!(!handler.handle_key_repeat(KeyCode::Down));
    }

    #[test]
    fn state_change_keys_ignore_auto_repeat() {
        let mut handler = InputHandler::with_default_config();

        handler.handle_key_press(KeyCode::Enter);
        assert!(!handler.handle_key_repeat(KeyCode::Enter));
        thread::sleep(Duration::from_millis(20));
        assert!(!handler.handle_key_repeat(KeyCode::Enter));
    }

    #[test]
    fn repeatable_waits_for_initial_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        handler.handle_key_press(KeyCode::Down);
        assert!(!handler.handle_key_repeat(KeyCode::Down));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_repeat(KeyCode::Down));
        assert!(!handler.handle_key_repeat(KeyCode::Down));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_repeat(KeyCode::Down));

        // A new press restarts the initial delay
        handler.handle_key_press(KeyCode::Down);
        assert!(!handler.handle_key_repeat(KeyCode::Down));
    }
}
