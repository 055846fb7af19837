use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::theme;

/// Bordered placeholder for a list that has nothing in it yet
pub struct EmptyState<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub hint: Option<&'a str>,
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::default(),
            Line::styled(self.message, theme::header_style()),
        ];
        if let Some(hint) = self.hint {
            lines.push(Line::default());
            lines.push(Line::styled(hint, theme::help_text_style()));
        }

        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title(self.title))
            .render(area, buf);
    }
}
