//! Screen layout definitions for the TUI
//!
//! Provides the fixed three-band layout: header, record table, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header area (title + page position + sort)
    pub header: Rect,

    /// Main content area (record table)
    pub table: Rect,

    /// Bottom status bar (key hints + role + errors)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    // Layout: Header + Table (remaining) + Status bar
    // Header and table carry their own borders, so no extra gap is needed
    let constraints = vec![
        Constraint::Length(3), // Header (top border + title row + bottom border)
        Constraint::Min(3),    // Table (glass container)
        Constraint::Length(1), // Status bar (single row, no border)
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        table: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.table.height, 20); // 24 - 3 - 1
        assert_eq!(layout.table.y, 3); // Starts after header
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23); // Last row
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(
            layout.header.height + layout.table.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_create_layout_tiny_terminal() {
        // Must not panic when there is no room to satisfy every constraint
        let area = Rect::new(0, 0, 20, 3);
        let layout = create(area);

        assert!(layout.header.height <= area.height);
        assert!(layout.table.height <= area.height);
    }

    #[test]
    fn test_layout_spans_full_width() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);

        assert_eq!(layout.header.width, 120);
        assert_eq!(layout.table.width, 120);
        assert_eq!(layout.status.width, 120);
    }
}
