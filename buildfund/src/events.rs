use buildfund_core::FileHandle;

use crate::state::QuickAction;
use crate::ui::screens::ScreenId;

/// Commands to execute (user actions → state changes)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    ShowScreen(ScreenId),
    CycleScreen { forward: bool },
    SelectNext,
    SelectPrevious,

    // Dashboard
    RunQuickAction(QuickAction),

    // Project upload
    EnterPathEntry,
    ExitPathEntry,
    AppendPathChar(char),
    DeletePathChar,
    SubmitPathEntry,
    UploadFiles { files: Vec<FileHandle> },

    // Lender directory
    OpenLenderTerms { lender_index: usize },

    // Modal
    FocusModalButton { forward: bool },
    ActivateModalButton,
    CloseModal,

    // Draw request form
    EnterDrawForm,
    ExitDrawForm,
    NavigateDrawField { forward: bool },
    AppendDrawChar(char),
    PasteDrawText(String),
    DeleteDrawChar,
    SubmitDrawRequest,

    // View toggles
    ToggleHelp,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A toast's display time ran out
    ToastExpired { id: u64 },
}
