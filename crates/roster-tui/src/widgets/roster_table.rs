//! # Roster Table Widget
//!
//! Renders the paginated influencer table with name, handle, city,
//! follower count, engagement, and created date columns. Supports
//! selection highlighting, sort indicators on the active column, and
//! loading/empty states.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use roster_app::state::BrowserState;
use roster_core::{Influencer, SortKey};

use super::{format_count, truncate};
use crate::theme::{palette, styles};

// ── Column widths (characters) ────────────────────────────────────────────────

/// Name column width in characters.
const COL_NAME: u16 = 20;

/// Username column width in characters.
const COL_HANDLE: u16 = 16;

/// City column width in characters.
const COL_CITY: u16 = 12;

/// Instagram follower count column width in characters.
const COL_FOLLOWERS: u16 = 10;

/// Engagement column width in characters.
const COL_ENGAGEMENT: u16 = 11;

// Created column gets the remaining space.

// ── RosterTable ───────────────────────────────────────────────────────────────

/// Table widget that renders the current page of the collection.
///
/// The widget is pure: it owns no state. The parent passes the browser
/// state; pagination and selection adjustments belong to the handler
/// layer.
pub struct RosterTable<'a> {
    browser: &'a BrowserState,
    /// chrono format string for the Created column.
    date_format: &'a str,
    /// Whether the table owns keyboard focus (no overlay on top).
    focused: bool,
}

impl<'a> RosterTable<'a> {
    pub fn new(browser: &'a BrowserState, date_format: &'a str) -> Self {
        Self {
            browser,
            date_format,
            focused: false,
        }
    }

    /// Mark the table as the focused surface.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for RosterTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Influencers ");
        let inner = block.inner(area);
        block.render(area, buf);

        // Need at least 3 inner rows: column headers + one data row + footer.
        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let header_area = Rect { height: 1, ..inner };
        self.render_column_headers(header_area, buf);

        let data_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(2),
            ..inner
        };
        self.render_rows(data_area, buf);

        let footer_area = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        self.render_footer(footer_area, buf);
    }
}

impl RosterTable<'_> {
    // ── Column headers ────────────────────────────────────────────────────────

    /// Render the column header row with a sort arrow on the active column.
    fn render_column_headers(&self, area: Rect, buf: &mut Buffer) {
        let columns = [
            (SortKey::Name, COL_NAME),
            (SortKey::Handle, COL_HANDLE),
            (SortKey::City, COL_CITY),
        ];

        let mut x = area.x + 1;
        for (key, width) in columns {
            buf.set_string(x, area.y, self.header_text(key), self.header_style(key));
            x += width;
        }

        // Followers is display-only; the API exposes no sort for it.
        buf.set_string(
            x,
            area.y,
            "Followers",
            Style::default()
                .fg(palette::TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
        );
        x += COL_FOLLOWERS;

        buf.set_string(
            x,
            area.y,
            self.header_text(SortKey::Engagement),
            self.header_style(SortKey::Engagement),
        );
        x += COL_ENGAGEMENT;

        buf.set_string(
            x,
            area.y,
            self.header_text(SortKey::CreatedAt),
            self.header_style(SortKey::CreatedAt),
        );
    }

    fn header_text(&self, key: SortKey) -> String {
        if self.browser.sort_key == key {
            format!("{} {}", key.label(), self.browser.sort_direction.arrow())
        } else {
            key.label().to_string()
        }
    }

    fn header_style(&self, key: SortKey) -> Style {
        if self.browser.sort_key == key {
            styles::accent_bold()
        } else {
            Style::default()
                .fg(palette::TEXT_MUTED)
                .add_modifier(Modifier::BOLD)
        }
    }

    // ── Data rows ─────────────────────────────────────────────────────────────

    /// Render the current page of records, one row each.
    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.browser.items.is_empty() {
            let message = if self.browser.loading {
                "Loading..."
            } else {
                "No influencers found"
            };
            buf.set_string(area.x + 1, area.y, message, styles::text_muted());
            return;
        }

        let visible_rows = area.height as usize;
        for (row_idx, record) in self.browser.items.iter().take(visible_rows).enumerate() {
            let y = area.y + row_idx as u16;
            let is_selected = self.browser.cursor == row_idx;

            let row_style = if is_selected && self.focused {
                styles::focused_selected()
            } else if is_selected {
                Style::default().bg(palette::POPUP_BG)
            } else {
                Style::default()
            };

            // Clear the row with its background before writing cells.
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(row_style).set_char(' ');
                }
            }

            self.render_row(record, area, y, row_style, buf);
        }
    }

    fn render_row(&self, record: &Influencer, area: Rect, y: u16, row_style: Style, buf: &mut Buffer) {
        let mut x = area.x + 1;

        buf.set_string(
            x,
            y,
            truncate(&record.name, COL_NAME as usize - 1),
            styles::text_primary().patch(row_style),
        );
        x += COL_NAME;

        buf.set_string(
            x,
            y,
            truncate(&record.handle, COL_HANDLE as usize - 1),
            styles::text_secondary().patch(row_style),
        );
        x += COL_HANDLE;

        buf.set_string(
            x,
            y,
            truncate(&record.city, COL_CITY as usize - 1),
            styles::text_secondary().patch(row_style),
        );
        x += COL_CITY;

        buf.set_string(
            x,
            y,
            format_count(record.instagram.followers),
            styles::text_primary().patch(row_style),
        );
        x += COL_FOLLOWERS;

        buf.set_string(
            x,
            y,
            format!("{:.1}%", record.average_engagement),
            styles::text_primary().patch(row_style),
        );
        x += COL_ENGAGEMENT;

        let created = record
            .created_at
            .map(|dt| dt.format(self.date_format).to_string())
            .unwrap_or_else(|| "-".to_string());
        let created_width = area.right().saturating_sub(x) as usize;
        buf.set_string(
            x,
            y,
            truncate(&created, created_width),
            styles::text_muted().patch(row_style),
        );
    }

    // ── Footer ────────────────────────────────────────────────────────────────

    /// Render the pagination line under the rows.
    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let page_text = format!(
            "Page {} of {}",
            self.browser.page, self.browser.total_pages
        );
        buf.set_string(area.x + 1, area.y, &page_text, styles::accent());

        let total_text = format!("  {} influencers", self.browser.total_records);
        buf.set_string(
            area.x + 1 + page_text.chars().count() as u16,
            area.y,
            total_text,
            styles::text_muted(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_record;
    use roster_core::SortDirection;

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn browser_with(items: Vec<Influencer>) -> BrowserState {
        let mut browser = BrowserState::new();
        browser.total_records = items.len() as u64;
        browser.items = items;
        browser.page = 1;
        browser.total_pages = 1;
        browser
    }

    fn render_to_buf(browser: &BrowserState, w: u16, h: u16) -> Buffer {
        let widget = RosterTable::new(browser, "%d %b %Y").focused(true);
        let mut buf = Buffer::empty(Rect::new(0, 0, w, h));
        widget.render(Rect::new(0, 0, w, h), &mut buf);
        buf
    }

    fn buf_text(buf: &Buffer, w: u16, h: u16) -> String {
        let mut s = String::new();
        for y in 0..h {
            for x in 0..w {
                if let Some(c) = buf.cell((x, y)) {
                    s.push_str(c.symbol());
                }
            }
            s.push('\n');
        }
        s
    }

    // ── Rendering / no-panic tests ────────────────────────────────────────────

    #[test]
    fn test_renders_without_panic() {
        let browser = browser_with(vec![]);
        render_to_buf(&browser, 80, 24);
    }

    #[test]
    fn test_renders_zero_height() {
        let browser = browser_with(vec![]);
        render_to_buf(&browser, 80, 0);
    }

    #[test]
    fn test_renders_zero_width() {
        let browser = browser_with(vec![]);
        render_to_buf(&browser, 0, 24);
    }

    #[test]
    fn test_renders_tiny_terminal() {
        let browser = browser_with(vec![sample_record("r1", "Asha Rao")]);
        render_to_buf(&browser, 10, 4);
    }

    // ── Column header tests ───────────────────────────────────────────────────

    #[test]
    fn test_shows_column_headers() {
        let browser = browser_with(vec![]);
        let buf = render_to_buf(&browser, 100, 24);
        let text = buf_text(&buf, 100, 3);
        assert!(text.contains("Name"), "missing Name header: {text:?}");
        assert!(text.contains("Username"), "missing Username header");
        assert!(text.contains("City"), "missing City header");
        assert!(text.contains("Followers"), "missing Followers header");
        assert!(text.contains("Engagement"), "missing Engagement header");
        assert!(text.contains("Created"), "missing Created header");
    }

    #[test]
    fn test_sort_arrow_on_active_column() {
        let mut browser = browser_with(vec![]);
        browser.sort_key = SortKey::Name;
        browser.sort_direction = SortDirection::Ascending;
        let buf = render_to_buf(&browser, 100, 24);
        let text = buf_text(&buf, 100, 3);
        assert!(text.contains("Name ▲"), "missing sort arrow: {text:?}");
    }

    #[test]
    fn test_default_sort_arrow_on_created() {
        // Fresh browser state sorts by newest first.
        let browser = browser_with(vec![]);
        let buf = render_to_buf(&browser, 100, 24);
        let text = buf_text(&buf, 100, 3);
        assert!(text.contains("Created ▼"), "missing default arrow: {text:?}");
    }

    // ── Row tests ─────────────────────────────────────────────────────────────

    #[test]
    fn test_shows_record_fields() {
        let browser = browser_with(vec![sample_record("r1", "Asha Rao")]);
        let buf = render_to_buf(&browser, 100, 24);
        let text = buf_text(&buf, 100, 24);
        assert!(text.contains("Asha Rao"));
        assert!(text.contains("@asha_rao"));
        assert!(text.contains("Mumbai"));
        assert!(text.contains("125.0K"));
        assert!(text.contains("4.2%"));
        assert!(text.contains("15 Mar 2024"));
    }

    #[test]
    fn test_selected_row_uses_highlight_style() {
        let browser = browser_with(vec![
            sample_record("r1", "Asha Rao"),
            sample_record("r2", "Devi Nair"),
        ]);
        let buf = render_to_buf(&browser, 100, 24);
        // Cursor starts on row 0, first data row is y=2 (border + headers).
        let cell = &buf[(2, 2)];
        assert_eq!(cell.bg, palette::ACCENT);
        assert_eq!(cell.fg, palette::CONTRAST_FG);
        // The unselected row keeps the default background.
        let other = &buf[(2, 3)];
        assert_ne!(other.bg, palette::ACCENT);
    }

    #[test]
    fn test_long_name_is_truncated() {
        let long_name = "A Very Long Influencer Name That Overflows";
        let browser = browser_with(vec![sample_record("r1", long_name)]);
        let buf = render_to_buf(&browser, 100, 24);
        let text = buf_text(&buf, 100, 24);
        assert!(!text.contains(long_name));
        assert!(text.contains('…'));
    }

    #[test]
    fn test_missing_created_date_shows_dash() {
        let mut record = sample_record("r1", "Asha Rao");
        record.created_at = None;
        let browser = browser_with(vec![record]);
        let buf = render_to_buf(&browser, 100, 24);
        let text = buf_text(&buf, 100, 24);
        assert!(!text.contains("Mar 2024"));
        // ASCII dash placeholder; the rounded border uses box-drawing glyphs
        assert!(text.contains('-'));
    }

    // ── Empty/loading states ──────────────────────────────────────────────────

    #[test]
    fn test_empty_state_message() {
        let browser = browser_with(vec![]);
        let buf = render_to_buf(&browser, 80, 24);
        let text = buf_text(&buf, 80, 24);
        assert!(text.contains("No influencers found"));
    }

    #[test]
    fn test_loading_state_message() {
        let mut browser = browser_with(vec![]);
        browser.loading = true;
        let buf = render_to_buf(&browser, 80, 24);
        let text = buf_text(&buf, 80, 24);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("No influencers found"));
    }

    #[test]
    fn test_loaded_rows_survive_loading_flag() {
        // A refetch keeps the previous page on screen.
        let mut browser = browser_with(vec![sample_record("r1", "Asha Rao")]);
        browser.loading = true;
        let buf = render_to_buf(&browser, 100, 24);
        let text = buf_text(&buf, 100, 24);
        assert!(text.contains("Asha Rao"));
    }

    // ── Footer tests ──────────────────────────────────────────────────────────

    #[test]
    fn test_footer_shows_page_position() {
        let mut browser = browser_with(vec![sample_record("r1", "Asha Rao")]);
        browser.page = 2;
        browser.total_pages = 5;
        browser.total_records = 42;
        let buf = render_to_buf(&browser, 80, 24);
        let text = buf_text(&buf, 80, 24);
        assert!(text.contains("Page 2 of 5"), "missing page info: {text:?}");
        assert!(text.contains("42 influencers"));
    }
}
