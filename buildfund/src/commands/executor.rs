use chrono::Local;
use tokio::sync::mpsc::UnboundedSender;

use crate::background::{toast_timer, BackgroundTaskManager};
use crate::events::{AppCommand, AppEvent};
use crate::state::upload::parse_file_list;
use crate::state::*;
use crate::ui::screens::ScreenId;

/// Execute a command and schedule the hide timer for any toast it shows
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    event_tx: &UnboundedSender<AppEvent>,
) {
    if let Some(ticket) = execute_command_sync(command, state) {
        toast_timer::schedule_hide(task_manager, event_tx, ticket);
    }
}

/// Apply a command to state without spawning tasks.
///
/// Returns the ticket for a toast the command showed, so the caller can
/// decide how to hide it.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Option<ToastTicket> {
    // Every command but SetPendingKey ends a `g` sequence
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));
    let mut ticket = None;

    match command {
        AppCommand::ShowScreen(screen) => {
            state.show_screen(screen);
        }

        AppCommand::CycleScreen { forward } => {
            let current = state.current_screen();
            let target = if forward {
                current.next()
            } else {
                current.prev()
            };
            state.show_screen(target);
        }

        AppCommand::SelectNext => match state.current_screen() {
            ScreenId::Dashboard => {
                let dashboard = &mut state.dashboard;
                dashboard.selected_action =
                    (dashboard.selected_action + 1) % QuickAction::ALL.len();
            }
            ScreenId::LoanMatching => state.lenders_view.select_next(),
            _ => {}
        },

        AppCommand::SelectPrevious => match state.current_screen() {
            ScreenId::Dashboard => {
                let count = QuickAction::ALL.len();
                let dashboard = &mut state.dashboard;
                dashboard.selected_action = (dashboard.selected_action + count - 1) % count;
            }
            ScreenId::LoanMatching => state.lenders_view.select_prev(),
            _ => {}
        },

        AppCommand::RunQuickAction(action) => {
            tracing::debug!("Quick action: {}", action.label());
            match action {
                QuickAction::ApplyLoan => state.show_screen(ScreenId::LoanMatching),
                QuickAction::SubmitDraw => state.show_screen(ScreenId::DrawRequest),
                QuickAction::TrackProgress => state.show_screen(ScreenId::BudgetTracker),
                QuickAction::InviteTeam => {
                    state.open_modal(ModalContent::InviteTeam);
                }
            }
        }

        AppCommand::EnterPathEntry => {
            state.upload.input_mode = InputMode::PathEntry;
        }

        AppCommand::ExitPathEntry => {
            state.upload.input_mode = InputMode::Normal;
            state.upload.path_input.clear();
        }

        AppCommand::AppendPathChar(c) => {
            state.upload.path_input.push(c);
        }

        AppCommand::DeletePathChar => {
            state.upload.path_input.pop();
        }

        AppCommand::SubmitPathEntry => {
            let text = std::mem::take(&mut state.upload.path_input);
            state.upload.input_mode = InputMode::Normal;
            ticket = state.upload_files(parse_file_list(&text), Local::now());
        }

        AppCommand::UploadFiles { files } => {
            // A drop replaces whatever paths were being typed
            if state.upload.is_drop_active() {
                state.upload.input_mode = InputMode::Normal;
                state.upload.path_input.clear();
            }
            ticket = state.upload_files(files, Local::now());
        }

        AppCommand::OpenLenderTerms { lender_index } => {
            state.open_modal(ModalContent::LenderTerms { lender_index });
        }

        AppCommand::FocusModalButton { forward } => {
            if let Some(modal) = state.modal.as_mut() {
                if forward {
                    modal.focus_next();
                } else {
                    modal.focus_prev();
                }
            }
        }

        AppCommand::ActivateModalButton => {
            // Every modal button is a close control
            if let Some(modal) = &state.modal {
                tracing::info!("Modal button '{}' pressed", modal.focused_label());
            }
            state.close_modal();
        }

        AppCommand::CloseModal => {
            state.close_modal();
        }

        AppCommand::EnterDrawForm => {
            let form = &mut state.draw_request;
            form.input_mode = InputMode::DrawForm;
            form.current_field = DrawField::default();
        }

        AppCommand::ExitDrawForm => {
            state.draw_request.input_mode = InputMode::Normal;
        }

        AppCommand::NavigateDrawField { forward } => {
            let form = &mut state.draw_request;
            form.current_field = if forward {
                form.current_field.next()
            } else {
                form.current_field.prev()
            };
        }

        AppCommand::AppendDrawChar(c) => {
            state.draw_request.current_value_mut().push(c);
        }

        AppCommand::PasteDrawText(text) => {
            // Fields are single line
            let text = text.replace(['\r', '\n'], " ");
            state.draw_request.current_value_mut().push_str(&text);
        }

        AppCommand::DeleteDrawChar => {
            state.draw_request.current_value_mut().pop();
        }

        AppCommand::SubmitDrawRequest => {
            // Submitted values are never read
            ticket = Some(state.show_toast("Draw request submitted"));
            state.draw_request.reset();
            state.show_screen(ScreenId::Dashboard);
        }

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
        }

        AppCommand::SetPendingKey(c) => {
            state.pending_key = Some(c);
        }

        AppCommand::ClearPendingKey => {
            state.pending_key = None;
        }

        AppCommand::Quit => {
            state.should_quit = true;
        }
    }

    if !is_setting_pending_key {
        state.pending_key = None;
    }

    ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildfund_core::FileHandle;

    #[test]
    fn drop_during_path_entry_leaves_entry() {
        let mut state = AppState::new();
        state.show_screen(ScreenId::UploadProject);
        execute_command_sync(AppCommand::EnterPathEntry, &mut state);
        execute_command_sync(AppCommand::AppendPathChar('x'), &mut state);

        let ticket = execute_command_sync(
            AppCommand::UploadFiles {
                files: vec![FileHandle::new("/plans/roof.pdf")],
            },
            &mut state,
        );

        assert!(ticket.is_some());
        assert_eq!(state.upload.input_mode, InputMode::Normal);
        assert!(state.upload.path_input.is_empty());
        assert_eq!(state.projects[0].title, "roof");
    }

    #[test]
    fn pasted_draw_text_is_flattened_into_focused_field() {
        let mut state = AppState::new();
        state.show_screen(ScreenId::DrawRequest);
        execute_command_sync(AppCommand::EnterDrawForm, &mut state);
        execute_command_sync(AppCommand::NavigateDrawField { forward: false }, &mut state);

        execute_command_sync(
            AppCommand::PasteDrawText("Siding done\nwindows next".to_string()),
            &mut state,
        );

        assert_eq!(state.draw_request.notes, "Siding done windows next");
        assert!(state.draw_request.amount.is_empty());
    }

    #[test]
    fn only_set_pending_key_survives_a_command() {
        let mut state = AppState::new();
        execute_command_sync(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));

        execute_command_sync(AppCommand::SelectNext, &mut state);
        assert_eq!(state.pending_key, None);
    }
}
