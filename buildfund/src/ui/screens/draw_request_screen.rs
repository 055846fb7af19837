use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, DrawField, InputMode};
use crate::ui::theme;

pub const HELP_TEXT: &str = "Enter/e: fill in request  Tab: next screen  ?: help  q: quit";
pub const HELP_TEXT_FORM: &str = "Tab/S-Tab: field  Enter: submit  Esc: stop editing";

const LABEL_WIDTH: usize = 11;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) -> &'static str {
    let form = &state.draw_request;
    let editing = form.input_mode == InputMode::DrawForm;

    let mut lines = vec![
        Line::from(Span::styled(
            "Request funds for a completed milestone.",
            theme::help_text_style(),
        )),
        Line::from(""),
    ];

    for field in DrawField::ALL {
        let focused = editing && form.current_field == field;
        let value_style = if focused {
            theme::form_field_focused_style()
        } else {
            theme::form_field_style()
        };

        let mut spans = vec![
            Span::styled(
                format!("{:width$}", field.label(), width = LABEL_WIDTH),
                theme::header_style(),
            ),
            Span::styled(form.value(field).to_string(), value_style),
        ];
        if focused {
            spans.push(Span::styled("█", theme::title_style()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let border_style = if editing {
        theme::accent_border_style()
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Draw Request"),
    );
    f.render_widget(paragraph, area);

    if editing {
        HELP_TEXT_FORM
    } else {
        HELP_TEXT
    }
}
