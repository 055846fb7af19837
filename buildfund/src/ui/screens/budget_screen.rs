use buildfund_core::BudgetCategory;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::state::AppState;
use crate::ui::{components::empty_state::EmptyState, theme, utils};

pub const HELP_TEXT: &str = "Tab: next screen  1-5: jump  ?: help  q: quit";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) -> &'static str {
    if state.budget.is_empty() {
        let placeholder = EmptyState {
            title: "Budget",
            message: "No budget categories",
            hint: None,
        };
        f.render_widget(placeholder, area);
        return HELP_TEXT;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(overall_title(&state.budget));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(theme::BUDGET_ITEM_HEIGHT); state.budget.len()];
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints(constraints)
        .split(inner);

    for (category, chunk) in state.budget.iter().zip(chunks.iter()) {
        render_budget_item(f, *chunk, category);
    }

    HELP_TEXT
}

/// Block title with the whole budget rolled up
fn overall_title(budget: &[BudgetCategory]) -> String {
    let (spent, total) = budget.iter().fold((0i64, 0i64), |(spent, total), c| {
        (spent.saturating_add(c.spent), total.saturating_add(c.total))
    });
    let overall = BudgetCategory::new("overall", "Overall", spent, total);

    format!(
        " Budget Tracker: {} ",
        utils::fmt_budget_figures(spent, total, overall.percent_spent())
    )
}

fn render_budget_item(f: &mut Frame, area: Rect, category: &BudgetCategory) {
    let percent = category.percent_spent();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(category.label.clone(), theme::header_style()),
        Span::raw("  "),
        Span::raw(utils::fmt_budget_figures(
            category.spent,
            category.total,
            percent,
        )),
    ]);
    f.render_widget(Paragraph::new(header), rows[0]);

    // The gauge cannot draw a negative width; the label still shows the real figure
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::budget_bar_color(percent)))
        .percent(percent.clamp(0, 100) as u16)
        .label(format!("{}%", percent));
    f.render_widget(gauge, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildfund_core::Catalog;
    use chrono::Local;

    use crate::input::Key;
    use crate::testing::TestApp;

    /// Half of `i64::MAX` or so; two of these overflow a plain sum
    fn huge_category(key: &str, label: &str) -> BudgetCategory {
        BudgetCategory::new(key, label, 5_000_000_000_000_000_000, 6_000_000_000_000_000_000)
    }

    #[test]
    fn overall_title_rolls_up_every_category() {
        let title = overall_title(&Catalog::seed().budget);
        assert_eq!(title, " Budget Tracker: $235,000 / $500,000 (47%) ");
    }

    #[test]
    fn overall_title_saturates_on_huge_amounts() {
        let budget = vec![
            huge_category("shell", "Shell"),
            huge_category("fitout", "Fit-out"),
        ];

        let title = overall_title(&budget);

        let max = utils::fmt_dollars(i64::MAX);
        assert!(title.contains(&format!("{max} / {max} (100%)")));
    }

    #[test]
    fn budget_screen_renders_huge_catalog_amounts() {
        let catalog = Catalog {
            lenders: Catalog::seed().lenders,
            budget: vec![huge_category("shell", "Shell"), huge_category("fitout", "Fit-out")],
        };
        let mut app = TestApp::with_state(AppState::from_catalog(catalog, Local::now()));
        app.send_key(Key::Char('5'));

        let frame = app.render(120, 40);

        assert!(frame.contains("Fit-out"));
        assert!(frame.contains("(83%)"));
    }

    #[test]
    fn empty_budget_shows_placeholder() {
        let mut state = AppState::new();
        state.budget.clear();
        let mut app = TestApp::with_state(state);
        app.send_key(Key::Char('5'));

        assert!(app.render(120, 40).contains("No budget categories"));
    }
}
