use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Second keys accepted after `g`, matching the handler's jump table
const JUMP_HINTS: &str = "d: dashboard  u: upload  l: lenders  r: draw request  b: budget";

/// Key hints for the active screen. While a key sequence is pending the bar
/// lists where the next key can jump instead.
pub fn render_help_bar(f: &mut Frame, area: Rect, hints: &str, pending_key: Option<char>) {
    let line = match pending_key {
        Some(key) => Line::from(vec![
            Span::styled(format!("{key}-  "), theme::title_style()),
            Span::raw(JUMP_HINTS),
        ]),
        None => Line::raw(hints),
    };

    let bar = Paragraph::new(line)
        .style(theme::help_text_style())
        .centered()
        .block(Block::bordered());
    f.render_widget(bar, area);
}
