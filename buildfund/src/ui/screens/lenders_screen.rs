use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};

use crate::state::AppState;
use crate::ui::{components::empty_state::EmptyState, theme};

pub const HELP_TEXT: &str = "j/k: select lender  Enter/t: view loan terms  ?: help  q: quit";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) -> &'static str {
    if state.lenders.is_empty() {
        let placeholder = EmptyState {
            title: "Lenders",
            message: "No lenders available",
            hint: Some("Add lenders to the catalog file"),
        };
        f.render_widget(placeholder, area);
        return HELP_TEXT;
    }

    let rows: Vec<Row> = state
        .lenders
        .iter()
        .map(|lender| {
            Row::new(vec![
                lender.name.clone(),
                lender.rate.clone(),
                lender.amount.clone(),
                lender.approval_time.clone(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(22),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec![
                "Lender",
                "Interest Rate",
                "Funding Amount",
                "Approval Time",
            ])
            .style(theme::header_style())
            .bottom_margin(1),
        )
        .column_spacing(theme::TABLE_COLUMN_SPACING)
        .row_highlight_style(theme::selection_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Lenders ({})", state.lenders.len())),
        );

    f.render_stateful_widget(table, area, &mut state.lenders_view.table_state.borrow_mut());

    HELP_TEXT
}
