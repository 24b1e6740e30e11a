//! Screen layout definitions for the TUI
//!
//! Header and footer rows have fixed heights; the project list takes
//! whatever remains.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, API base URL and spinner (glass container)
    pub header: Rect,

    /// One-line status banner
    pub status: Rect,

    /// Project cards or the empty state
    pub list: Rect,

    /// Pagination bar; zero height while pagination is hidden
    pub pagination: Rect,

    /// Key hints footer
    pub hints: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_pagination` - Whether the pagination bar gets a row
pub fn create(area: Rect, show_pagination: bool) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + title row + bottom border
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(u16::from(show_pagination)),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        status: chunks[1],
        list: chunks[2],
        pagination: chunks[3],
        hints: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_pagination() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.y, 3);
        assert_eq!(layout.list.y, 4);
        assert_eq!(layout.list.height, 18); // 24 - 3 - 1 - 1 - 1
        assert_eq!(layout.pagination.height, 1);
        assert_eq!(layout.hints.y, 23);
    }

    #[test]
    fn test_layout_without_pagination() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.pagination.height, 0);
        assert_eq!(layout.list.height, 19);
    }
}
