use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::ui::{components::project_list, theme};

pub const HELP_TEXT: &str = "Enter/a: type paths  drag files here to upload  ?: help  q: quit";
pub const HELP_TEXT_ENTRY: &str = "Enter: upload  Esc: cancel  comma separates files";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) -> &'static str {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(theme::DROP_ZONE_HEIGHT),
            Constraint::Min(3),
        ])
        .split(area);

    render_drop_zone(f, chunks[0], state);
    project_list::render_project_list(f, chunks[1], state);

    if state.upload.is_drop_active() {
        HELP_TEXT_ENTRY
    } else {
        HELP_TEXT
    }
}

fn render_drop_zone(f: &mut Frame, area: Rect, state: &AppState) {
    let active = state.upload.is_drop_active();

    let (border_style, lines) = if active {
        (
            theme::accent_border_style().add_modifier(Modifier::BOLD),
            vec![
                Line::from(Span::styled("Files to upload:", theme::header_style())),
                Line::from(vec![
                    Span::styled(
                        state.upload.path_input.clone(),
                        theme::form_field_focused_style(),
                    ),
                    Span::styled("█", theme::title_style()),
                ]),
            ],
        )
    } else {
        (
            Style::default().fg(theme::COLOR_HELP_TEXT),
            vec![
                Line::from("Drop plans, permits or quotes here"),
                Line::from(Span::styled(
                    "or press Enter to type file paths",
                    theme::help_text_style(),
                )),
            ],
        )
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Upload Project"),
    );

    f.render_widget(paragraph, area);
}
