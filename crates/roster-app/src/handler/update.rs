//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{browser, editor, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_spinner();

            // A fired debounce window sends the final text as a fresh
            // page-1 fetch. Each keystroke re-armed the deadline, so only
            // the last one gets here.
            if state.browser.search_deadline_due(Instant::now()) {
                state.browser.search_deadline = None;
                state.browser.page = 1;
                return UpdateResult::message(Message::FetchPage);
            }

            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Browser Messages
        // ─────────────────────────────────────────────────────────
        Message::FetchPage => browser::handle_fetch_page(state),
        Message::PageLoaded { seq, page } => browser::handle_page_loaded(state, seq, page),
        Message::PageLoadFailed { seq, error } => {
            browser::handle_page_load_failed(state, seq, error)
        }
        Message::StartSearch => browser::handle_start_search(state),
        Message::SearchInput { text } => browser::handle_search_input(state, text),
        Message::SubmitSearch => browser::handle_submit_search(state),
        Message::CloseSearch => browser::handle_close_search(state),
        Message::SortBy { key } => browser::handle_sort(state, key),
        Message::NextPage => browser::handle_next_page(state),
        Message::PrevPage => browser::handle_prev_page(state),
        Message::CursorUp => browser::handle_cursor_up(state),
        Message::CursorDown => browser::handle_cursor_down(state),
        Message::CursorTop => browser::handle_cursor_top(state),
        Message::CursorBottom => browser::handle_cursor_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Detail Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail => browser::handle_open_detail(state),
        Message::DetailLoaded { seq, record } => browser::handle_detail_loaded(state, seq, record),
        Message::DetailLoadFailed { seq, error } => {
            browser::handle_detail_load_failed(state, seq, error)
        }
        Message::CloseDetail => browser::handle_close_detail(state),

        // ─────────────────────────────────────────────────────────
        // Delete Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestDelete => browser::handle_request_delete(state),
        Message::ConfirmDelete => browser::handle_confirm_delete(state),
        Message::CancelDelete => browser::handle_cancel_delete(state),
        Message::DeleteSucceeded => browser::handle_delete_succeeded(state),
        Message::DeleteFailed { error } => browser::handle_delete_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateForm => editor::handle_open_create(state),
        Message::OpenEditForm => editor::handle_open_edit(state, false),
        Message::OpenReplaceForm => editor::handle_open_edit(state, true),
        Message::FormNextField => editor::handle_next_field(state),
        Message::FormPrevField => editor::handle_prev_field(state),
        Message::FormStartEdit => editor::handle_start_edit(state),
        Message::FormEditInput { text } => editor::handle_edit_input(state, text),
        Message::FormCommitEdit => editor::handle_commit_edit(state),
        Message::FormCancelEdit => editor::handle_cancel_edit(state),
        Message::FormAddEntry => editor::handle_add_entry(state),
        Message::FormRemoveEntry => editor::handle_remove_entry(state),
        Message::FormSubmit => editor::handle_submit(state),
        Message::FormCancel => editor::handle_cancel(state),
        Message::SubmitSucceeded => editor::handle_submit_succeeded(state),
        Message::SubmitFailed { error } => editor::handle_submit_failed(state, error),
    }
}
