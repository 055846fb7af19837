use crate::commands::handlers;
use crate::events::{AppCommand, AppEvent};
use crate::input::{InputEvent, KeyEvent};
use crate::state::{reducer, AppState};

/// Trait for handling command execution (production = spawns timers, test = records them)
///
/// Tests plug in a handler that records toast timers instead of spawning them.
pub trait CommandHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Application core with no terminal attached
///
/// Generic over H (handler). The handler type determines how command side
/// effects run: in production toast timers are spawned on the runtime, in
/// tests they are only recorded.
pub struct AppCore<H: CommandHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: CommandHandler> AppCore<H> {
    /// Create a new application core seeded with the built-in catalog
    pub fn new(handler: H) -> Self {
        Self::with_state(handler, AppState::new())
    }

    pub fn with_state(handler: H, ui_state: AppState) -> Self {
        Self { ui_state, handler }
    }

    /// Translate terminal input to an AppCommand and execute it
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = handlers::handle_input(event, &self.ui_state) {
            tracing::info!("Executing command: {:?}", command);
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        self.handle_input(InputEvent::Key(event));
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.handle_input(InputEvent::Paste(text.to_string()));
    }

    /// Handle an event from a background task (or injected by a test)
    pub fn handle_app_event(&mut self, event: AppEvent) {
        reducer::reduce_app_event(&mut self.ui_state, event);
    }

    /// Read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the handler (e.g. to cancel its tasks on shutdown)
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
