use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::ToastState;
use crate::ui::{layouts, theme};

const TOAST_MIN_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;

pub fn render_toast(f: &mut Frame, toast: &ToastState) {
    let width = (toast.message.chars().count() as u16)
        .saturating_add(4)
        .max(TOAST_MIN_WIDTH);
    let area = layouts::bottom_right(width, TOAST_HEIGHT, f.area());

    f.render_widget(Clear, area);
    let paragraph = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::accent_border_style()),
        );
    f.render_widget(paragraph, area);
}
