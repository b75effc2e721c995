//! Status bar widget
//!
//! Single bottom row showing the session role, busy indicator, key hints
//! for the active mode, and list errors.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use roster_app::state::{AppState, UiMode};

use crate::theme::{palette, styles};

/// Braille spinner characters for smooth animation
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Status bar widget showing role, activity, and keybindings
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Role indicator with its capability styling
    fn role_span(&self) -> Span<'static> {
        let (icon, label, style) = styles::role_indicator(self.state.role);
        Span::styled(format!("{} {}", icon, label), style)
    }

    /// Spinner segment while a request is in flight
    fn busy_span(&self) -> Option<Span<'static>> {
        let label = if self.state.browser.deleting {
            "Deleting"
        } else if self.state.editor.as_ref().is_some_and(|e| e.submitting) {
            "Saving"
        } else if self.state.browser.loading {
            "Loading"
        } else if self.state.detail.loading {
            "Fetching"
        } else {
            return None;
        };

        let spinner = SPINNER[self.state.spinner_frame % SPINNER.len()];
        Some(Span::styled(
            format!("{} {}", spinner, label),
            styles::status_yellow(),
        ))
    }

    /// List error segment, shown in place of the browse hints
    fn error_span(&self) -> Option<Span<'static>> {
        self.state
            .browser
            .error
            .as_ref()
            .map(|error| Span::styled(format!("✗ {}", error), styles::status_red()))
    }

    /// Key hints for the active mode as (key, label) pairs
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let can_mutate = self.state.role.can_mutate();
        match self.state.ui_mode {
            UiMode::Browse => {
                let mut hints = vec![
                    ("/", "search"),
                    ("↑↓", "move"),
                    ("←→", "page"),
                    ("1-5", "sort"),
                    ("Enter", "view"),
                ];
                if can_mutate {
                    hints.push(("n", "new"));
                    hints.push(("d", "delete"));
                }
                hints.push(("q", "quit"));
                hints
            }
            UiMode::SearchInput => vec![("Enter", "apply"), ("Esc", "close")],
            UiMode::Detail => {
                let mut hints = Vec::new();
                if can_mutate {
                    hints.push(("e", "edit"));
                    hints.push(("E", "replace"));
                    hints.push(("d", "delete"));
                }
                hints.push(("Esc", "close"));
                hints
            }
            UiMode::EditForm => {
                if self.state.editor.as_ref().is_some_and(|e| e.editing) {
                    vec![("Enter", "commit"), ("Esc", "revert")]
                } else {
                    vec![
                        ("↑↓", "fields"),
                        ("Enter", "edit"),
                        ("a", "add entry"),
                        ("x", "remove"),
                        ("s", "save"),
                        ("Esc", "discard"),
                    ]
                }
            }
            UiMode::ConfirmDelete | UiMode::ConfirmQuit => {
                vec![("y", "confirm"), ("n", "cancel")]
            }
        }
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(palette::TEXT_MUTED));

        let mut segments = vec![Span::raw(" "), self.role_span()];

        if let Some(busy) = self.busy_span() {
            segments.push(separator.clone());
            segments.push(busy);
        }

        // A list error replaces the browse hints; it is the next thing
        // the user has to deal with.
        if self.state.ui_mode == UiMode::Browse {
            if let Some(error) = self.error_span() {
                segments.push(separator.clone());
                segments.push(error);
                segments.push(separator);
                segments.push(Span::styled("r", styles::keybinding()));
                segments.push(Span::styled(" retry", styles::text_muted()));
                return segments;
            }
        }

        for (key, label) in self.hints() {
            segments.push(separator.clone());
            segments.push(Span::styled(key, styles::keybinding()));
            segments.push(Span::styled(format!(" {}", label), styles::text_muted()));
        }

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.build_segments());
        Paragraph::new(line)
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
