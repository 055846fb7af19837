//! Colors, sizes and styles shared by every screen.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Selected quick action or lender row
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers and field labels
pub const COLOR_HEADER: Color = Color::Yellow;

/// Hints and inactive tabs
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Project titles and the active tab
pub const COLOR_TITLE: Color = Color::Cyan;

/// Filled part of budget bars
pub const COLOR_BAR: Color = Color::Green;

/// Budget bars at or above the cap
pub const COLOR_BAR_FULL: Color = Color::Red;

/// Modal border
pub const COLOR_BORDER_INFO: Color = Color::Blue;

/// Border color for the active drop zone and toasts
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Focused draw request field
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

/// Margin around the whole frame
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the navigation bar
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Height of the key hint bar
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of one budget item (header line + bar + spacing)
pub const BUDGET_ITEM_HEIGHT: u16 = 3;

/// Height of the upload drop zone
pub const DROP_ZONE_HEIGHT: u16 = 5;

/// Width of the quick actions column on the dashboard
pub const QUICK_ACTIONS_WIDTH: u16 = 26;

/// Gap between lender table columns
pub const TABLE_COLUMN_SPACING: u16 = 2;

// =============================================================================
// Style Functions
// =============================================================================

/// Highlighted list or table row
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Column headers and field labels
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for titles and the active navigation tab
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}

/// Borders that mark where input goes
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Style for a modal button, highlighted when focused
pub fn button_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(COLOR_TITLE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HELP_TEXT)
    }
}

/// Bar color for a spent percentage
pub fn budget_bar_color(percent: i64) -> Color {
    if percent >= 100 {
        COLOR_BAR_FULL
    } else {
        COLOR_BAR
    }
}
