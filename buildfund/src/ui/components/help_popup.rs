use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::ScreenId, theme};

pub fn render_help_popup(f: &mut Frame, screen: ScreenId) {
    let help_items = get_help_items(screen);

    let inner = super::popup::render_overlay(
        f,
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: ScreenId) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        ScreenId::Dashboard => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter", "Run selected quick action"));
        }
        ScreenId::UploadProject => {
            items.push(("Enter/a", "Type file paths (comma separated)"));
            items.push(("Drag & drop", "Drop files onto the terminal to upload"));
            items.push(("Esc", "Stop typing without uploading"));
        }
        ScreenId::LoanMatching => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/t", "View loan terms"));
        }
        ScreenId::DrawRequest => {
            items.push(("Enter/e", "Fill in the draw request"));
            items.push(("Tab/S-Tab", "Next / previous field"));
            items.push(("Enter", "Submit (while filling in)"));
            items.push(("Esc", "Stop editing"));
        }
        ScreenId::BudgetTracker => {
            items.push(("", "Spend per category against its total"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("Tab/S-Tab", "Next / previous screen"));
    items.push(("1-5", "Jump to screen"));
    items.push(("g then d", "Go to dashboard"));
    items.push(("g then u", "Go to upload project"));
    items.push(("g then l", "Go to loan matching"));
    items.push(("g then r", "Go to draw request"));
    items.push(("g then b", "Go to budget tracker"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}
