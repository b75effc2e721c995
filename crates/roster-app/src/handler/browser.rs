//! Collection browser handlers: fetch, search, sort, pagination, detail,
//! delete.

use roster_api::RecordPage;
use roster_core::prelude::*;
use roster_core::{Influencer, SortDirection, SortKey};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────────────────
// List fetch
// ─────────────────────────────────────────────────────────────────────────────

/// Kick off a list fetch with the current query parameters. The sequence
/// number from `begin_fetch` fences the completion against later requests.
pub(crate) fn handle_fetch_page(state: &mut AppState) -> UpdateResult {
    // The fetch carries the current search text; drop any pending debounce.
    state.browser.search_deadline = None;
    let seq = state.browser.begin_fetch();
    UpdateResult::action(UpdateAction::FetchPage {
        seq,
        page: state.browser.page,
        search: state.browser.search_input.clone(),
        sort_key: state.browser.sort_key,
        sort_direction: state.browser.sort_direction,
    })
}

pub(crate) fn handle_page_loaded(state: &mut AppState, seq: u64, page: RecordPage) -> UpdateResult {
    if seq != state.browser.list_seq {
        debug!("Dropping stale list response (seq {seq})");
        return UpdateResult::none();
    }

    let browser = &mut state.browser;
    browser.loading = false;
    browser.error = None;
    browser.items = page.items;
    browser.total_pages = page.total_pages.max(1);
    browser.page = page.current_page.max(1);
    browser.total_records = page.total_records;
    if browser.cursor >= browser.items.len() {
        browser.cursor = browser.items.len().saturating_sub(1);
    }
    UpdateResult::none()
}

/// A failed fetch keeps the rows already on screen; the error banner and
/// retry hint render over them.
pub(crate) fn handle_page_load_failed(state: &mut AppState, seq: u64, error: String) -> UpdateResult {
    if seq != state.browser.list_seq {
        debug!("Dropping stale list failure (seq {seq})");
        return UpdateResult::none();
    }
    state.browser.loading = false;
    state.browser.error = Some(error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_start_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::SearchInput;
    UpdateResult::none()
}

/// Each keystroke replaces the text and re-arms the debounce deadline, so
/// a fetch goes out only after typing pauses.
pub(crate) fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    state.browser.search_input = text;
    state.browser.arm_search_deadline();
    UpdateResult::none()
}

/// Enter skips the debounce: fetch now with whatever is typed.
pub(crate) fn handle_submit_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    state.browser.search_deadline = None;
    state.browser.page = 1;
    UpdateResult::message(Message::FetchPage)
}

/// Esc leaves input mode without killing a pending debounce; the fetch
/// still fires once the window elapses.
pub(crate) fn handle_close_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Sort and pagination
// ─────────────────────────────────────────────────────────────────────────────

/// Selecting the active column flips its direction; selecting another
/// column starts it ascending.
pub(crate) fn handle_sort(state: &mut AppState, key: SortKey) -> UpdateResult {
    let browser = &mut state.browser;
    browser.sort_direction =
        if browser.sort_key == key && browser.sort_direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
    browser.sort_key = key;
    UpdateResult::message(Message::FetchPage)
}

pub(crate) fn handle_next_page(state: &mut AppState) -> UpdateResult {
    if state.browser.page < state.browser.total_pages {
        state.browser.page += 1;
        UpdateResult::message(Message::FetchPage)
    } else {
        UpdateResult::none()
    }
}

pub(crate) fn handle_prev_page(state: &mut AppState) -> UpdateResult {
    if state.browser.page > 1 {
        state.browser.page -= 1;
        UpdateResult::message(Message::FetchPage)
    } else {
        UpdateResult::none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cursor
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.browser.select_previous();
    UpdateResult::none()
}

pub(crate) fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    state.browser.select_next();
    UpdateResult::none()
}

pub(crate) fn handle_cursor_top(state: &mut AppState) -> UpdateResult {
    state.browser.cursor = 0;
    UpdateResult::none()
}

pub(crate) fn handle_cursor_bottom(state: &mut AppState) -> UpdateResult {
    state.browser.cursor = state.browser.items.len().saturating_sub(1);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail overlay
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_open_detail(state: &mut AppState) -> UpdateResult {
    let Some(id) = state
        .browser
        .selected()
        .map(|record| record.id.clone())
        .filter(|id| !id.is_empty())
    else {
        return UpdateResult::none();
    };

    state.ui_mode = UiMode::Detail;
    let seq = state.detail.begin_fetch();
    UpdateResult::action(UpdateAction::FetchDetail { seq, id })
}

pub(crate) fn handle_detail_loaded(
    state: &mut AppState,
    seq: u64,
    record: Box<Influencer>,
) -> UpdateResult {
    if seq != state.detail.seq {
        debug!("Dropping stale detail response (seq {seq})");
        return UpdateResult::none();
    }
    // The overlay closed while the fetch was in flight.
    if !state.detail.loading {
        return UpdateResult::none();
    }
    state.detail.record = Some(record);
    state.detail.loading = false;
    state.detail.error = None;
    UpdateResult::none()
}

pub(crate) fn handle_detail_load_failed(
    state: &mut AppState,
    seq: u64,
    error: String,
) -> UpdateResult {
    if seq != state.detail.seq || !state.detail.loading {
        return UpdateResult::none();
    }
    state.detail.loading = false;
    state.detail.error = Some(error);
    UpdateResult::none()
}

pub(crate) fn handle_close_detail(state: &mut AppState) -> UpdateResult {
    state.detail.close();
    state.ui_mode = UiMode::Browse;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────────────────

/// Stash the target id and ask for confirmation. Works from the table and
/// from the detail overlay.
pub(crate) fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    if !state.role.can_mutate() {
        return UpdateResult::none();
    }

    let id = match state.ui_mode {
        UiMode::Detail => state.detail.record.as_ref().map(|record| record.id.clone()),
        _ => state.browser.selected().map(|record| record.id.clone()),
    };
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return UpdateResult::none();
    };

    state.browser.delete_pending = Some(id);
    state.ui_mode = UiMode::ConfirmDelete;
    UpdateResult::none()
}

pub(crate) fn handle_confirm_delete(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.browser.delete_pending.take() else {
        state.ui_mode = UiMode::Browse;
        return UpdateResult::none();
    };

    state.browser.deleting = true;
    state.detail.close();
    state.ui_mode = UiMode::Browse;
    UpdateResult::action(UpdateAction::DeleteRecord { id })
}

/// Dismiss the dialog, returning to the detail overlay when it is still
/// showing the record.
pub(crate) fn handle_cancel_delete(state: &mut AppState) -> UpdateResult {
    state.browser.delete_pending = None;
    state.ui_mode = if state.detail.record.is_some() {
        UiMode::Detail
    } else {
        UiMode::Browse
    };
    UpdateResult::none()
}

/// The page is refetched with the current parameters so the table reflects
/// the shrunken collection.
pub(crate) fn handle_delete_succeeded(state: &mut AppState) -> UpdateResult {
    state.browser.deleting = false;
    UpdateResult::message(Message::FetchPage)
}

pub(crate) fn handle_delete_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Delete failed: {error}");
    state.browser.deleting = false;
    state.browser.error = Some(error);
    UpdateResult::none()
}
