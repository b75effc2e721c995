//! Search input prompt widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::palette;

/// Inline search prompt rendered over the bottom row of the table.
///
/// Shown while typing, and kept on screen afterwards as long as a filter
/// is applied so the user can see why the list is narrowed.
pub struct SearchInput<'a> {
    /// Current query text.
    query: &'a str,
    /// Whether the prompt owns keyboard input (shows the cursor).
    active: bool,
    /// Whether a debounced fetch is still queued for this text.
    pending: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            active: false,
            pending: false,
        }
    }

    /// Show the input cursor and editing hints.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Flag a queued debounced fetch (hint shown while the prompt is idle).
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Format: "/query_" while typing, "/query" once applied
        let mut spans = vec![
            Span::styled(
                "/",
                Style::default()
                    .fg(palette::SEARCH_PROMPT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.query, Style::default().fg(palette::TEXT_PRIMARY)),
        ];

        if self.active {
            spans.push(Span::styled(
                "_",
                Style::default().fg(palette::SEARCH_PROMPT),
            ));
            spans.push(Span::styled(
                "  Enter apply · Esc close",
                Style::default().fg(palette::TEXT_MUTED),
            ));
        } else if self.pending {
            spans.push(Span::styled(
                "  searching...",
                Style::default().fg(palette::TEXT_MUTED),
            ));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(area, buf);
    }
}
