use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
};

/// Framework-agnostic key representation so tests can drive the app
/// without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    /// Anything the app does not bind
    Other,
}

/// Modifier key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Key event with modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Default::default()
            },
        }
    }
}

/// Terminal input the app reacts to.
///
/// A bracketed paste is what the terminal produces when files are dragged
/// onto its window, so it doubles as the "drop" gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Paste(String),
}

impl InputEvent {
    /// Convert a raw terminal event, dropping key releases, mouse and resize events
    pub fn from_terminal(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                Some(Self::Key(KeyEvent::from(key)))
            }
            CrosstermEvent::Paste(text) => Some(Self::Paste(text)),
            _ => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Other,
        }
    }
}

impl From<CrosstermKeyEvent> for KeyEvent {
    fn from(event: CrosstermKeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers {
                ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
                alt: event.modifiers.contains(KeyModifiers::ALT),
                shift: event.modifiers.contains(KeyModifiers::SHIFT),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn key_presses_and_pastes_are_kept() {
        let press = CrosstermKeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            InputEvent::from_terminal(CrosstermEvent::Key(press)),
            Some(InputEvent::Key(KeyEvent::new(Key::Char('q'))))
        );

        assert_eq!(
            InputEvent::from_terminal(CrosstermEvent::Paste("/tmp/a.pdf".to_string())),
            Some(InputEvent::Paste("/tmp/a.pdf".to_string()))
        );
    }

    #[test]
    fn key_releases_and_resizes_are_dropped() {
        let release = CrosstermKeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(InputEvent::from_terminal(CrosstermEvent::Key(release)), None);
        assert_eq!(InputEvent::from_terminal(CrosstermEvent::Resize(80, 24)), None);
    }

    #[test]
    fn ctrl_modifier_is_carried() {
        let event = CrosstermKeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyEvent::from(event), KeyEvent::with_ctrl(Key::Char('c')));
    }
}
