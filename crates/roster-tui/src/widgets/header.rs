//! Header bar widget
//!
//! Top banner with the app title and the deployment it is pointed at.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use roster_app::state::AppState;

use crate::theme::{palette, styles};

/// Main header showing app title and target deployment
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Connection dot; turns red while the list is in an error state
    fn status_dot(&self) -> Span<'static> {
        if self.state.browser.error.is_some() {
            Span::styled("●", styles::status_red())
        } else {
            Span::styled("●", styles::status_green())
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::raw(" "),
            self.status_dot(),
            Span::styled(
                " Roster",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(
                self.state.settings.api.base_url.clone(),
                styles::text_muted(),
            ),
        ]);

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_state;

    fn render_to_text(state: &AppState) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 3));
        MainHeader::new(state).render(Rect::new(0, 0, 80, 3), &mut buf);
        let mut s = String::new();
        for y in 0..3 {
            for x in 0..80 {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn test_shows_title_and_target() {
        let state = create_test_state();
        let text = render_to_text(&state);
        assert!(text.contains("Roster"));
        assert!(text.contains("https://api.phyo.ai/api"));
    }

    #[test]
    fn test_status_dot_turns_red_on_error() {
        let mut state = create_test_state();
        state.browser.error = Some("HTTP error! status: 500".to_string());
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 3));
        MainHeader::new(&state).render(Rect::new(0, 0, 80, 3), &mut buf);
        // Dot is the second cell of the inner row
        assert_eq!(buf[(2, 1)].fg, palette::STATUS_RED);
    }

    #[test]
    fn test_renders_in_tiny_area() {
        let state = create_test_state();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
        MainHeader::new(&state).render(Rect::new(0, 0, 5, 2), &mut buf);
    }
}
