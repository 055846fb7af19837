pub mod modal;
pub mod reducer;
pub mod toast;
pub mod upload;

use buildfund_core::{BudgetCategory, Catalog, FileHandle, Lender, Project};
use chrono::{DateTime, Local};
use ratatui::widgets::TableState;
use std::cell::RefCell;
use std::time::Duration;

use crate::ui::screens::{ScreenId, UnknownScreen};
pub use modal::{ModalContent, ModalState};
pub use toast::{ToastState, ToastTicket};

/// Default display time for toasts
pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(2200);

/// Represents input mode for screens that accept text
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    PathEntry,
    DrawForm,
}

/// Shortcuts offered on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ApplyLoan,
    SubmitDraw,
    TrackProgress,
    InviteTeam,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::ApplyLoan,
        QuickAction::SubmitDraw,
        QuickAction::TrackProgress,
        QuickAction::InviteTeam,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ApplyLoan => "Apply for a loan",
            Self::SubmitDraw => "Submit a draw",
            Self::TrackProgress => "Track progress",
            Self::InviteTeam => "Invite team",
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct DashboardState {
    pub selected_action: usize,
}

impl DashboardState {
    pub fn selected(&self) -> QuickAction {
        QuickAction::ALL[self.selected_action % QuickAction::ALL.len()]
    }
}

#[derive(Default, Debug, Clone)]
pub struct UploadState {
    pub input_mode: InputMode,
    pub path_input: String,
}

impl UploadState {
    /// The drop zone is highlighted while paths are being typed
    pub fn is_drop_active(&self) -> bool {
        self.input_mode == InputMode::PathEntry
    }
}

#[derive(Debug, Clone)]
pub struct LendersState {
    pub table_state: RefCell<TableState>,
    pub num_lenders: usize,
}

impl LendersState {
    pub fn new(num_lenders: usize) -> Self {
        let selected = if num_lenders > 0 { Some(0) } else { None };
        Self {
            table_state: RefCell::new(TableState::default().with_selected(selected)),
            num_lenders,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.borrow().selected()
    }
}

/// Fields of the draw request form, in tab order
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawField {
    #[default]
    Amount,
    Milestone,
    Notes,
}

impl DrawField {
    pub const ALL: [DrawField; 3] = [DrawField::Amount, DrawField::Milestone, DrawField::Notes];

    pub fn next(&self) -> Self {
        match self {
            Self::Amount => Self::Milestone,
            Self::Milestone => Self::Notes,
            Self::Notes => Self::Amount,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Amount => Self::Notes,
            Self::Milestone => Self::Amount,
            Self::Notes => Self::Milestone,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Milestone => "Milestone",
            Self::Notes => "Notes",
        }
    }
}

/// Draw request form. The values are only ever displayed and cleared.
#[derive(Default, Debug, Clone)]
pub struct DrawRequestState {
    pub input_mode: InputMode,
    pub current_field: DrawField,
    pub amount: String,
    pub milestone: String,
    pub notes: String,
}

impl DrawRequestState {
    pub fn value(&self, field: DrawField) -> &str {
        match field {
            DrawField::Amount => &self.amount,
            DrawField::Milestone => &self.milestone,
            DrawField::Notes => &self.notes,
        }
    }

    pub fn current_value_mut(&mut self) -> &mut String {
        match self.current_field {
            DrawField::Amount => &mut self.amount,
            DrawField::Milestone => &mut self.milestone,
            DrawField::Notes => &mut self.notes,
        }
    }

    /// Reset every field and leave form mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    current_screen: ScreenId,

    // Directory data
    pub projects: Vec<Project>,
    pub lenders: Vec<Lender>,
    pub budget: Vec<BudgetCategory>,

    // Per-screen view state
    pub dashboard: DashboardState,
    pub upload: UploadState,
    pub lenders_view: LendersState,
    pub draw_request: DrawRequestState,

    // Overlays
    pub modal: Option<ModalState>,
    pub toast: Option<ToastState>,
    toast_seq: u64,
    pub toast_timeout: Duration,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    /// State seeded with the built-in catalog
    pub fn new() -> Self {
        Self::from_catalog(Catalog::seed(), Local::now())
    }

    pub fn from_catalog(catalog: Catalog, now: DateTime<Local>) -> Self {
        let lenders_view = LendersState::new(catalog.lenders.len());
        Self {
            current_screen: ScreenId::Dashboard,

            projects: vec![Project::seed(now)],
            lenders: catalog.lenders,
            budget: catalog.budget,

            dashboard: DashboardState::default(),
            upload: UploadState::default(),
            lenders_view,
            draw_request: DrawRequestState::default(),

            modal: None,
            toast: None,
            toast_seq: 0,
            toast_timeout: DEFAULT_TOAST_TIMEOUT,

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    pub fn with_toast_timeout(mut self, timeout: Duration) -> Self {
        self.toast_timeout = timeout;
        self
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current_screen
    }

    /// Make `screen` the one active panel
    pub fn show_screen(&mut self, screen: ScreenId) {
        tracing::debug!("Showing screen {} (was {})", screen, self.current_screen);
        self.current_screen = screen;
    }

    /// Route by raw screen id. Unknown ids are logged and leave the
    /// current screen untouched.
    pub fn show_screen_by_id(&mut self, raw: &str) -> Result<(), UnknownScreen> {
        match raw.parse::<ScreenId>() {
            Ok(screen) => {
                self.show_screen(screen);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Ignoring navigation: {}", err);
                Err(err)
            }
        }
    }

    pub fn is_active(&self, screen: ScreenId) -> bool {
        self.current_screen == screen
    }

    /// Every screen paired with whether it is the active one
    pub fn panels(&self) -> impl Iterator<Item = (ScreenId, bool)> + '_ {
        ScreenId::ALL
            .iter()
            .map(move |&screen| (screen, self.is_active(screen)))
    }

    /// Create a project from an upload and put it first in the list.
    ///
    /// An empty file list changes nothing and returns `None`.
    pub fn upload_files(
        &mut self,
        files: Vec<FileHandle>,
        now: DateTime<Local>,
    ) -> Option<ToastTicket> {
        let Some(project) = Project::from_upload(files, now) else {
            tracing::debug!("Upload with no files ignored");
            return None;
        };

        tracing::info!(
            "Created project {} ({}) with {} file(s)",
            project.id,
            project.title,
            project.file_count()
        );
        self.projects.insert(0, project);
        Some(self.show_toast("Project uploaded"))
    }

    /// Open a modal. Terms for a lender index outside the list are refused.
    pub fn open_modal(&mut self, content: ModalContent) -> bool {
        if let ModalContent::LenderTerms { lender_index } = content {
            if lender_index >= self.lenders.len() {
                tracing::warn!(
                    "No lender at index {} ({} lenders)",
                    lender_index,
                    self.lenders.len()
                );
                return false;
            }
        }

        tracing::debug!("Opening modal: {:?}", content);
        self.modal = Some(ModalState::new(content));
        true
    }

    pub fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            tracing::debug!("Modal closed");
        }
    }

    /// Show a toast, replacing any visible one. The returned ticket tells the
    /// caller when to hide it.
    pub fn show_toast(&mut self, message: impl Into<String>) -> ToastTicket {
        self.toast_seq += 1;
        let toast = ToastState {
            id: self.toast_seq,
            message: message.into(),
        };
        tracing::debug!("Toast #{}: {}", toast.id, toast.message);
        self.toast = Some(toast);

        ToastTicket {
            id: self.toast_seq,
            hide_after: self.toast_timeout,
        }
    }

    /// Hide the toast if it is still the one identified by `id`
    pub fn hide_toast(&mut self, id: u64) -> bool {
        match &self.toast {
            Some(toast) if toast.id == id => {
                self.toast = None;
                true
            }
            Some(toast) => {
                tracing::debug!("Stale hide for toast #{} (showing #{})", id, toast.id);
                false
            }
            None => false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            match table_state.selected() {
                Some(0) | None => table_state.select(Some(self.num_items() - 1)),
                Some(i) => table_state.select(Some(i - 1)),
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            match table_state.selected() {
                Some(i) if i + 1 < num_items => table_state.select(Some(i + 1)),
                _ => table_state.select(Some(0)),
            }
        }
    }
}

impl Scrollable for LendersState {
    fn num_items(&self) -> usize {
        self.num_lenders
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_panels(state: &AppState) -> Vec<ScreenId> {
        state
            .panels()
            .filter(|(_, active)| *active)
            .map(|(screen, _)| screen)
            .collect()
    }

    #[test]
    fn exactly_one_panel_is_active_after_each_navigation() {
        let mut state = AppState::new();
        assert_eq!(active_panels(&state), vec![ScreenId::Dashboard]);

        let sequence = [
            ScreenId::LoanMatching,
            ScreenId::LoanMatching,
            ScreenId::BudgetTracker,
            ScreenId::UploadProject,
            ScreenId::DrawRequest,
            ScreenId::Dashboard,
        ];
        for screen in sequence {
            state.show_screen(screen);
            assert_eq!(active_panels(&state), vec![screen]);
            assert_eq!(state.current_screen(), screen);
        }
    }

    #[test]
    fn unknown_screen_id_leaves_screen_unchanged() {
        let mut state = AppState::new();
        state.show_screen(ScreenId::BudgetTracker);

        let result = state.show_screen_by_id("settings");

        assert!(result.is_err());
        assert_eq!(state.current_screen(), ScreenId::BudgetTracker);
        assert_eq!(active_panels(&state).len(), 1);
    }

    #[test]
    fn known_screen_id_routes() {
        let mut state = AppState::new();
        state.show_screen_by_id("draw-request").unwrap();
        assert_eq!(state.current_screen(), ScreenId::DrawRequest);
    }

    #[test]
    fn upload_prepends_one_project() {
        let mut state = AppState::new();
        let before = state.projects.len();
        let files = vec![
            FileHandle::new("elevations.pdf"),
            FileHandle::new("survey.png"),
            FileHandle::new("soils.docx"),
        ];

        let ticket = state.upload_files(files, Local::now());

        assert!(ticket.is_some());
        assert_eq!(state.projects.len(), before + 1);
        assert_eq!(state.projects[0].title, "elevations");
        assert_eq!(state.projects[0].file_count(), 3);
        assert_eq!(state.toast.as_ref().unwrap().message, "Project uploaded");
    }

    #[test]
    fn empty_upload_changes_nothing() {
        let mut state = AppState::new();
        let before = state.projects.clone();

        assert!(state.upload_files(Vec::new(), Local::now()).is_none());
        assert_eq!(state.projects, before);
        assert!(state.toast.is_none());
    }

    #[test]
    fn modal_reopens_after_close() {
        let mut state = AppState::new();
        for _ in 0..3 {
            assert!(state.open_modal(ModalContent::LenderTerms { lender_index: 2 }));
            assert!(state.modal.is_some());
            state.close_modal();
            assert!(state.modal.is_none());
        }
    }

    #[test]
    fn modal_refuses_unknown_lender() {
        let mut state = AppState::new();
        assert!(!state.open_modal(ModalContent::LenderTerms { lender_index: 42 }));
        assert!(state.modal.is_none());
    }

    #[test]
    fn stale_toast_hide_does_not_hide_newer_toast() {
        let mut state = AppState::new().with_toast_timeout(Duration::from_millis(500));
        let first = state.show_toast("Project uploaded");
        let second = state.show_toast("Draw request submitted");

        assert_eq!(second.hide_after, Duration::from_millis(500));
        assert!(!state.hide_toast(first.id));
        assert_eq!(
            state.toast.as_ref().unwrap().message,
            "Draw request submitted"
        );

        assert!(state.hide_toast(second.id));
        assert!(state.toast.is_none());
    }

    #[test]
    fn lender_selection_wraps() {
        let mut state = AppState::new();
        assert_eq!(state.lenders_view.selected(), Some(0));

        state.lenders_view.select_prev();
        assert_eq!(state.lenders_view.selected(), Some(5));

        state.lenders_view.select_next();
        assert_eq!(state.lenders_view.selected(), Some(0));
    }

    #[test]
    fn draw_field_cycles_both_ways() {
        for field in DrawField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(DrawField::Notes.next(), DrawField::Amount);
    }
}
