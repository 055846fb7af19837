use ratatui::{backend::TestBackend, Terminal};

use crate::app_core::{AppCore, CommandHandler};
use crate::commands::executor;
use crate::events::{AppCommand, AppEvent};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, ToastTicket};
use crate::ui::screens::ScreenId;

/// Command handler for tests: executes synchronously and records toast
/// hide timers instead of spawning them.
#[derive(Default)]
pub struct MockCommandHandler {
    pub scheduled_toasts: Vec<ToastTicket>,
}

impl MockCommandHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommandHandler for MockCommandHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        if let Some(ticket) = executor::execute_command_sync(command, state) {
            self.scheduled_toasts.push(ticket);
        }
    }
}

pub struct TestApp {
    core: AppCore<MockCommandHandler>,
}

impl TestApp {
    /// Create a new test app with the seeded catalog
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockCommandHandler::new()),
        }
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            core: AppCore::with_state(MockCommandHandler::new(), state),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Simulate a bracketed paste (a file drop)
    pub fn send_paste(&mut self, text: &str) {
        self.core.handle_paste(text);
    }

    /// Inject a background event (e.g. a toast timer firing)
    pub fn send_app_event(&mut self, event: AppEvent) {
        self.core.handle_app_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Toast hide timers requested so far, oldest first
    pub fn scheduled_toasts(&self) -> &[ToastTicket] {
        &self.core.handler().scheduled_toasts
    }

    /// Draw one frame into an in-memory buffer and return its text, row by row
    pub fn render(&self, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|f| crate::ui::render_app(f, self.state()))
            .expect("test backend never fails");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    pub fn assert_screen(&self, expected: ScreenId) {
        assert_eq!(
            self.state().current_screen(),
            expected,
            "Expected different screen"
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
