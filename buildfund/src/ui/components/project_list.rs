use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::state::AppState;
use crate::ui::{components::empty_state::EmptyState, theme, utils};

/// Project cards, newest first
pub fn render_project_list(f: &mut Frame, area: Rect, state: &AppState) {
    if state.projects.is_empty() {
        let placeholder = EmptyState {
            title: "Projects",
            message: "No projects yet",
            hint: Some("Upload plans from the Upload Project screen"),
        };
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .projects
        .iter()
        .map(|project| {
            ListItem::new(vec![
                Line::from(Span::styled(project.title.clone(), theme::title_style())),
                Line::from(Span::styled(
                    utils::fmt_project_meta(project),
                    theme::help_text_style(),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let title = format!("Projects ({})", state.projects.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}
