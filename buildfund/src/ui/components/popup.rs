use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Clear},
    Frame,
};

use crate::ui::layouts;

/// Blank a centered `(width %, height %)` area of the frame, border it with a
/// centered title and hand back the space inside the border.
pub fn render_overlay(f: &mut Frame, size: (u16, u16), title: &str, border_style: Style) -> Rect {
    let (width, height) = size;
    let area = layouts::centered_popup(width, height, f.area());

    let block = Block::bordered()
        .title(Line::from(title).centered())
        .border_style(border_style);
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);
    inner
}
