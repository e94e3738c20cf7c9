use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Create the main layout with status bar, filter panel, product
    /// table, and hint bar
    ///
    /// Returns: (status_area, filter_area, table_area, hint_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Length(4), // Filter panel (owner tabs + search line)
                Constraint::Min(0),    // Product table
                Constraint::Length(1), // Hint bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }
}
