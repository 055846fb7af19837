pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to the active screen renderer, then
/// draws overlays. This function is read-only and never mutates state.
pub fn render_app(f: &mut Frame, state: &AppState) {
    let (nav_area, content_area, help_area) = layouts::screen_layout(f.area());

    components::nav_bar::render_nav_bar(f, nav_area, state);

    let help_text = match state.current_screen() {
        ScreenId::Dashboard => dashboard_screen::render(f, content_area, state),
        ScreenId::UploadProject => upload_screen::render(f, content_area, state),
        ScreenId::LoanMatching => lenders_screen::render(f, content_area, state),
        ScreenId::DrawRequest => draw_request_screen::render(f, content_area, state),
        ScreenId::BudgetTracker => budget_screen::render(f, content_area, state),
    };
    components::help_bar::render_help_bar(f, help_area, help_text, state.pending_key);

    if let Some(modal) = &state.modal {
        components::modal::render_modal(f, modal, &state.lenders);
    }

    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }

    if let Some(toast) = &state.toast {
        components::toast::render_toast(f, toast);
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::TestApp;
    use crate::ui::screens::ScreenId;

    #[test]
    fn every_screen_renders_its_title_in_the_nav_bar() {
        let mut app = TestApp::new();
        for (i, screen) in ScreenId::ALL.iter().enumerate() {
            app.send_key(crate::input::Key::Char(char::from(b'1' + i as u8)));
            let frame = app.render(120, 40);
            assert!(frame.contains(screen.title()), "{} missing", screen.title());
        }
    }

    #[test]
    fn pending_g_lists_jump_targets() {
        let mut app = TestApp::new();
        app.send_key(crate::input::Key::Char('g'));

        let frame = app.render(120, 40);
        assert!(frame.contains("g-"));
        assert!(frame.contains("r: draw request"));
    }

    #[test]
    fn empty_project_list_shows_placeholder() {
        let mut state = crate::state::AppState::new();
        state.projects.clear();
        let app = TestApp::with_state(state);

        let frame = app.render(120, 40);
        assert!(frame.contains("No projects yet"));
        assert!(frame.contains("Upload plans from the Upload Project screen"));
    }

    #[test]
    fn help_popup_overlays_the_screen() {
        let mut app = TestApp::new();
        app.send_key(crate::input::Key::Char('?'));

        let frame = app.render(120, 40);
        assert!(frame.contains("Help (press ? or Esc to close)"));
        assert!(frame.contains("Run selected quick action"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = TestApp::new();
        app.render(10, 4);
    }
}
