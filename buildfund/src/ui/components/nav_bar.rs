use itertools::Itertools;
use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::state::AppState;
use crate::ui::screens::ScreenId;
use crate::ui::theme;

/// Top navigation: one tab per screen, the active one highlighted
pub fn render_nav_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let titles = ScreenId::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| format!("{} {}", i + 1, screen.title()))
        .collect_vec();

    let tabs = Tabs::new(titles)
        .select(state.current_screen().position())
        .style(theme::help_text_style())
        .highlight_style(theme::title_style())
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::COLOR_HELP_TEXT))
                .title(" buildfund "),
        );

    f.render_widget(tabs, area);
}
