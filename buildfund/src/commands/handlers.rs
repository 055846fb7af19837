use crate::events::AppCommand;
use crate::input::{InputEvent, Key, KeyEvent};
use crate::state::upload::parse_file_list;
use crate::state::*;
use crate::ui::screens::ScreenId;

/// Map terminal input to an AppCommand based on current UI state.
/// Returns None if the input should be ignored.
pub fn handle_input(event: InputEvent, state: &AppState) -> Option<AppCommand> {
    match event {
        InputEvent::Key(key) => handle_key_input(key, state),
        InputEvent::Paste(text) => handle_paste(&text, state),
    }
}

/// A paste on the upload screen is a file drop, even while paths are being
/// typed. In the draw form it is typed into the focused field.
pub fn handle_paste(text: &str, state: &AppState) -> Option<AppCommand> {
    if state.modal.is_some() || state.help_visible {
        return None;
    }

    match state.current_screen() {
        ScreenId::UploadProject => Some(AppCommand::UploadFiles {
            files: parse_file_list(text),
        }),
        ScreenId::DrawRequest if state.draw_request.input_mode == InputMode::DrawForm => {
            Some(AppCommand::PasteDrawText(text.to_string()))
        }
        screen => {
            tracing::debug!("Ignoring paste on {} screen", screen);
            None
        }
    }
}

pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: an open modal captures everything
    if state.modal.is_some() {
        return handle_modal_keys(key);
    }

    // Priority 2: typing upload paths
    if state.current_screen() == ScreenId::UploadProject
        && state.upload.input_mode == InputMode::PathEntry
    {
        return match key {
            Key::Enter => Some(AppCommand::SubmitPathEntry),
            Key::Esc => Some(AppCommand::ExitPathEntry),
            Key::Backspace => Some(AppCommand::DeletePathChar),
            Key::Char(c) => Some(AppCommand::AppendPathChar(c)),
            _ => None,
        };
    }

    // Priority 3: draw request form
    if state.current_screen() == ScreenId::DrawRequest
        && state.draw_request.input_mode == InputMode::DrawForm
    {
        return handle_draw_form_keys(key);
    }

    // Priority 4: help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            ('g', Key::Char('d')) => Some(AppCommand::ShowScreen(ScreenId::Dashboard)),
            ('g', Key::Char('u')) => Some(AppCommand::ShowScreen(ScreenId::UploadProject)),
            ('g', Key::Char('l')) => Some(AppCommand::ShowScreen(ScreenId::LoanMatching)),
            ('g', Key::Char('r')) => Some(AppCommand::ShowScreen(ScreenId::DrawRequest)),
            ('g', Key::Char('b')) => Some(AppCommand::ShowScreen(ScreenId::BudgetTracker)),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),
        (_, Key::Char('q')) => Some(AppCommand::Quit),
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),
        (_, Key::Tab) => Some(AppCommand::CycleScreen { forward: true }),
        (_, Key::BackTab) => Some(AppCommand::CycleScreen { forward: false }),
        (_, Key::Char(c @ '1'..='5')) => {
            ScreenId::from_position(c as usize - '1' as usize).map(AppCommand::ShowScreen)
        }

        // Dashboard
        (ScreenId::Dashboard, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (ScreenId::Dashboard, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (ScreenId::Dashboard, Key::Enter) => {
            Some(AppCommand::RunQuickAction(state.dashboard.selected()))
        }

        // Upload
        (ScreenId::UploadProject, Key::Enter | Key::Char('a')) => {
            Some(AppCommand::EnterPathEntry)
        }

        // Lender directory
        (ScreenId::LoanMatching, Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (ScreenId::LoanMatching, Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (ScreenId::LoanMatching, Key::Enter | Key::Char('t')) => state
            .lenders_view
            .selected()
            .map(|lender_index| AppCommand::OpenLenderTerms { lender_index }),

        // Draw request
        (ScreenId::DrawRequest, Key::Enter | Key::Char('e')) => Some(AppCommand::EnterDrawForm),

        _ => None,
    }
}

fn handle_modal_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Enter | Key::Char(' ') => Some(AppCommand::ActivateModalButton),
        Key::Esc => Some(AppCommand::CloseModal),
        Key::Right | Key::Tab | Key::Char('l') => {
            Some(AppCommand::FocusModalButton { forward: true })
        }
        Key::Left | Key::BackTab | Key::Char('h') => {
            Some(AppCommand::FocusModalButton { forward: false })
        }
        _ => None,
    }
}

fn handle_draw_form_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Enter => Some(AppCommand::SubmitDrawRequest),
        Key::Esc => Some(AppCommand::ExitDrawForm),
        Key::Tab | Key::Down => Some(AppCommand::NavigateDrawField { forward: true }),
        Key::BackTab | Key::Up => Some(AppCommand::NavigateDrawField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteDrawChar),
        Key::Char(c) => Some(AppCommand::AppendDrawChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildfund_core::FileHandle;

    fn press(key: Key, state: &AppState) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    #[test]
    fn number_keys_jump_to_screens() {
        let state = AppState::new();
        assert_eq!(
            press(Key::Char('3'), &state),
            Some(AppCommand::ShowScreen(ScreenId::LoanMatching))
        );
        assert_eq!(press(Key::Char('6'), &state), None);
    }

    #[test]
    fn modal_swallows_navigation_keys() {
        let mut state = AppState::new();
        state.open_modal(ModalContent::InviteTeam);

        assert_eq!(press(Key::Char('q'), &state), None);
        assert_eq!(press(Key::Tab, &state), Some(AppCommand::FocusModalButton { forward: true }));
        assert_eq!(press(Key::Esc, &state), Some(AppCommand::CloseModal));
    }

    #[test]
    fn typing_q_in_path_entry_does_not_quit() {
        let mut state = AppState::new();
        state.show_screen(ScreenId::UploadProject);
        state.upload.input_mode = InputMode::PathEntry;

        assert_eq!(press(Key::Char('q'), &state), Some(AppCommand::AppendPathChar('q')));
    }

    #[test]
    fn paste_only_uploads_on_upload_screen() {
        let mut state = AppState::new();
        assert_eq!(handle_paste("/tmp/a.pdf", &state), None);

        state.show_screen(ScreenId::UploadProject);
        assert_eq!(
            handle_paste("/tmp/a.pdf", &state),
            Some(AppCommand::UploadFiles {
                files: vec![FileHandle::new("/tmp/a.pdf")]
            })
        );
    }

    #[test]
    fn paste_in_draw_form_fills_the_field() {
        let mut state = AppState::new();
        state.show_screen(ScreenId::DrawRequest);
        assert_eq!(handle_paste("12500", &state), None);

        state.draw_request.input_mode = InputMode::DrawForm;
        assert_eq!(
            handle_paste("12500", &state),
            Some(AppCommand::PasteDrawText("12500".to_string()))
        );
    }

    #[test]
    fn ctrl_c_quits_even_while_typing() {
        let mut state = AppState::new();
        state.show_screen(ScreenId::DrawRequest);
        state.draw_request.input_mode = InputMode::DrawForm;

        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
    }
}
