use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::state::{AppState, QuickAction};
use crate::ui::{components::project_list, theme};

pub const HELP_TEXT: &str = "j/k: select  Enter: run action  Tab: next screen  ?: help  q: quit";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) -> &'static str {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(theme::QUICK_ACTIONS_WIDTH),
            Constraint::Min(20),
        ])
        .split(area);

    render_quick_actions(f, chunks[0], state);
    project_list::render_project_list(f, chunks[1], state);

    HELP_TEXT
}

fn render_quick_actions(f: &mut Frame, area: Rect, state: &AppState) {
    let selected = state.dashboard.selected();
    let items: Vec<ListItem> = QuickAction::ALL
        .iter()
        .map(|action| {
            let style = if *action == selected {
                theme::selection_style()
            } else {
                Style::default()
            };
            ListItem::new(format!(" {}", action.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quick Actions"),
    );

    f.render_widget(list, area);
}
