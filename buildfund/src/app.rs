use anyhow::{Context, Result};
use buildfund_core::Catalog;
use chrono::Local;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::app_core::{AppCore, CommandHandler};
use crate::background::BackgroundTaskManager;
use crate::commands::executor;
use crate::config::Settings;
use crate::events::{AppCommand, AppEvent};
use crate::input::InputEvent;
use crate::logging::init_logging;
use crate::state::AppState;

/// Command handler that runs toast timers on the tokio runtime
struct LiveHandler {
    task_manager: BackgroundTaskManager,
    event_tx: UnboundedSender<AppEvent>,
}

impl CommandHandler for LiveHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command(command, state, &mut self.task_manager, &self.event_tx);
    }
}

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let (log_path, _log_guard) = init_logging(&self.settings.log_filter)?;

        tracing::info!("buildfund starting, logging to {}", log_path.display());

        let ui_state = self.init_state()?;

        let mut terminal = self.init()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        let handler = LiveHandler {
            task_manager: BackgroundTaskManager::new(),
            event_tx,
        };
        let mut core = AppCore::with_state(handler, ui_state);

        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");
        let result = event_loop(&mut terminal, &mut core, &mut event_stream, &mut event_rx).await;
        if let Err(err) = &result {
            tracing::error!("Event loop failed: {:#}", err);
        }

        // Also reached when the loop fails
        tracing::info!("Cleaning up application");
        core.handler_mut().task_manager.cancel_all();
        self.exit(terminal)?;

        result
    }

    /// Build the initial state from settings and the optional catalog file
    fn init_state(&self) -> Result<AppState> {
        let catalog = match &self.settings.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Catalog::load(path)
                    .with_context(|| format!("Failed to load catalog {}", path.display()))?
            }
            None => Catalog::seed(),
        };

        let mut state = AppState::from_catalog(catalog, Local::now())
            .with_toast_timeout(self.settings.toast_timeout());

        if state.show_screen_by_id(&self.settings.start_screen).is_err() {
            tracing::warn!(
                "start_screen '{}' is not a screen, starting on the dashboard",
                self.settings.start_screen
            );
        }

        Ok(state)
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Draw, then wait for terminal input or a background event, until quit.
///
/// Generic over the backend and the input stream so tests can run it against
/// `TestBackend` and a scripted stream.
async fn event_loop<B, S, H>(
    terminal: &mut Terminal<B>,
    core: &mut AppCore<H>,
    events: &mut S,
    event_rx: &mut UnboundedReceiver<AppEvent>,
) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    S: Stream<Item = std::io::Result<CrosstermEvent>> + Unpin,
    H: CommandHandler,
{
    loop {
        terminal.draw(|f| {
            crate::ui::render_app(f, core.state());
        })?;

        tokio::select! {
            Some(event) = events.next() => match event {
                Ok(event) => {
                    if let Some(input) = InputEvent::from_terminal(event) {
                        tracing::debug!("Input: {:?}", input);
                        core.handle_input(input);
                    }
                }
                Err(err) => tracing::warn!("Terminal read failed: {}", err),
            },
            Some(app_event) = event_rx.recv() => {
                tracing::debug!("Received app event: {:?}", app_event);
                core.handle_app_event(app_event);
            }
        }

        if core.should_quit() {
            tracing::info!("Quit requested, exiting event loop");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};
    use futures::stream;
    use ratatui::backend::TestBackend;

    use crate::testing::MockCommandHandler;
    use crate::ui::screens::ScreenId;

    fn key(c: char) -> std::io::Result<CrosstermEvent> {
        Ok(CrosstermEvent::Key(CrosstermKeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::NONE,
        )))
    }

    #[tokio::test]
    async fn loop_runs_until_quit_and_returns_ok() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut core = AppCore::new(MockCommandHandler::new());
        let (_event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut events = stream::iter(vec![
            key('2'),
            Ok(CrosstermEvent::Paste("/plans/footings.pdf".to_string())),
            key('q'),
        ]);

        event_loop(&mut terminal, &mut core, &mut events, &mut event_rx)
            .await
            .unwrap();

        assert!(core.should_quit());
        assert_eq!(core.state().current_screen(), ScreenId::UploadProject);
        assert_eq!(core.state().projects[0].title, "footings");
    }

    #[tokio::test]
    async fn terminal_read_errors_do_not_end_the_loop() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut core = AppCore::new(MockCommandHandler::new());
        let (_event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut events = stream::iter(vec![
            Err(std::io::Error::other("tty hiccup")),
            key('3'),
            key('q'),
        ]);

        event_loop(&mut terminal, &mut core, &mut events, &mut event_rx)
            .await
            .unwrap();

        assert_eq!(core.state().current_screen(), ScreenId::LoanMatching);
    }

    #[tokio::test(start_paused = true)]
    async fn background_events_reach_the_state() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut core = AppCore::new(MockCommandHandler::new());
        core.handle_key(crate::input::KeyEvent::new(crate::input::Key::Char('2')));
        core.handle_paste("/plans/slab.pdf");
        let toast_id = core.state().toast.as_ref().unwrap().id;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        event_tx.send(AppEvent::ToastExpired { id: toast_id }).unwrap();

        // Quit arrives only after the queued hide has been handled
        let mut events = Box::pin(stream::once(async {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            key('q')
        }));

        event_loop(&mut terminal, &mut core, &mut events, &mut event_rx)
            .await
            .unwrap();

        assert!(core.should_quit());
        assert!(core.state().toast.is_none());
    }
}
