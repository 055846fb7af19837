//! Rect builders for the frame, popups and the toast corner.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, NAV_BAR_HEIGHT, SCREEN_MARGIN};

/// Split the frame into (nav bar, screen content, key hints)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Rect centered in `area`, sized as a percentage of it on each axis
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A fixed-size rectangle in the bottom-right corner, above the help bar.
/// Shrinks to fit when the parent is smaller.
pub fn bottom_right(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let bottom_offset = (HELP_BAR_HEIGHT + SCREEN_MARGIN).min(area.height - height);

    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height - bottom_offset,
        width,
        height,
    }
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Medium popup (60% x 50%) - for modal dialogs
    pub const MEDIUM: (u16, u16) = (60, 50);

    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_right_sits_above_help_bar() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = bottom_right(30, 3, area);

        assert_eq!(rect, Rect::new(70, 33, 30, 3));
    }

    #[test]
    fn bottom_right_fits_tiny_areas() {
        let area = Rect::new(0, 0, 10, 2);
        let rect = bottom_right(30, 3, area);

        assert_eq!(rect, Rect::new(0, 0, 10, 2));
    }
}
