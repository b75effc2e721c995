//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use roster_app::state::{AppState, UiMode};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the search prompt over the table footer row.
///
/// `force` renders even with an empty query (for SearchInput mode); in
/// Browse mode the prompt only stays on screen while a filter is applied.
fn render_search_overlay(
    frame: &mut Frame,
    areas: &layout::ScreenAreas,
    state: &AppState,
    force: bool,
) {
    let pending = state.browser.search_deadline.is_some();
    if force || pending || !state.browser.search_input.is_empty() {
        let search_area = Rect::new(
            areas.table.x + 1,
            areas.table.y + areas.table.height.saturating_sub(2),
            areas.table.width.saturating_sub(2),
            1,
        );
        frame.render_widget(Clear, search_area);
        let mut input = widgets::SearchInput::new(&state.browser.search_input).pending(pending);
        if force {
            input = input.active();
        }
        frame.render_widget(input, search_area);
    }
}

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    let table = widgets::RosterTable::new(&state.browser, &state.settings.ui.date_format)
        .focused(state.ui_mode == UiMode::Browse);
    frame.render_widget(table, areas.table);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Render modal overlays based on UI mode
    match state.ui_mode {
        UiMode::Browse => {
            // No overlay - but keep an applied filter visible
            render_search_overlay(frame, &areas, state, false);
        }
        UiMode::SearchInput => {
            render_search_overlay(frame, &areas, state, true);
        }
        UiMode::Detail => {
            let panel =
                widgets::DetailPanel::new(&state.detail, &state.settings.ui.date_format);
            frame.render_widget(panel, area);
        }
        UiMode::EditForm => {
            if let Some(editor) = &state.editor {
                frame.render_widget(widgets::FormPanel::new(editor), area);
            }
        }
        UiMode::ConfirmDelete => {
            let name = delete_target_name(state).unwrap_or("this influencer");
            frame.render_widget(widgets::ConfirmDialog::delete(name), area);
        }
        UiMode::ConfirmQuit => {
            frame.render_widget(widgets::ConfirmDialog::quit(), area);
        }
    }
}

/// Name of the record queued for deletion, looked up in whichever state
/// still holds it (open detail overlay first, then the current page).
fn delete_target_name(state: &AppState) -> Option<&str> {
    let id = state.browser.delete_pending.as_deref()?;
    state
        .detail
        .record
        .as_deref()
        .filter(|record| record.id == id)
        .map(|record| record.name.as_str())
        .or_else(|| {
            state
                .browser
                .items
                .iter()
                .find(|record| record.id == id)
                .map(|record| record.name.as_str())
        })
}
