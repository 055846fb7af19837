use buildfund_core::Lender;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::ModalState;
use crate::ui::{layouts, theme};

/// Render the open modal: body text plus a row of close buttons
pub fn render_modal(f: &mut Frame, modal: &ModalState, lenders: &[Lender]) {
    let Some(body) = modal.content.body_lines(lenders) else {
        return;
    };

    let inner = super::popup::render_overlay(
        f,
        layouts::popup_sizes::MEDIUM,
        modal.content.title(),
        theme::info_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = body.into_iter().map(Line::from).collect::<Vec<_>>();
    if let Some(first) = lines.first_mut() {
        first.style = theme::title_style().add_modifier(Modifier::BOLD);
    }
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[0]);

    let mut buttons = Vec::new();
    for (i, label) in modal.content.buttons().iter().enumerate() {
        if i > 0 {
            buttons.push(Span::raw("  "));
        }
        buttons.push(Span::styled(
            format!("[ {} ]", label),
            theme::button_style(i == modal.focused_button),
        ));
    }
    let buttons = Paragraph::new(Line::from(buttons)).alignment(Alignment::Center);
    f.render_widget(buttons, chunks[1]);
}
