//! Key event handlers for different UI modes

use roster_core::SortKey;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Detail => handle_key_detail(state, key),
        UiMode::EditForm => handle_key_edit_form(state, key),
        UiMode::ConfirmDelete => handle_key_confirm_delete(key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

/// Handle key events in the collection table
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Request quit (may show confirmation dialog if a form is open)
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        // Force quit (bypass confirmation) - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Search / refresh
        // ─────────────────────────────────────────────────────────
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('r') => Some(Message::FetchPage),

        // ─────────────────────────────────────────────────────────
        // Cursor and pagination
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::CursorTop),
        InputKey::End | InputKey::Char('G') => Some(Message::CursorBottom),
        InputKey::Left | InputKey::Char('h') | InputKey::PageUp => Some(Message::PrevPage),
        InputKey::Right | InputKey::Char('l') | InputKey::PageDown => Some(Message::NextPage),

        // ─────────────────────────────────────────────────────────
        // Sort columns
        // ─────────────────────────────────────────────────────────
        // Number keys pick the column; picking it again flips direction
        InputKey::Char('1') => Some(Message::SortBy { key: SortKey::Name }),
        InputKey::Char('2') => Some(Message::SortBy {
            key: SortKey::Handle,
        }),
        InputKey::Char('3') => Some(Message::SortBy { key: SortKey::City }),
        InputKey::Char('4') => Some(Message::SortBy {
            key: SortKey::CreatedAt,
        }),
        InputKey::Char('5') => Some(Message::SortBy {
            key: SortKey::Engagement,
        }),

        // ─────────────────────────────────────────────────────────
        // Record operations
        // ─────────────────────────────────────────────────────────
        InputKey::Enter => Some(Message::OpenDetail),
        InputKey::Char('n') if state.role.can_mutate() => Some(Message::OpenCreateForm),
        InputKey::Char('d') | InputKey::Delete if state.role.can_mutate() => {
            Some(Message::RequestDelete)
        }

        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Exit input mode; the typed text and any pending debounce survive
        InputKey::Esc => Some(Message::CloseSearch),

        // Submit immediately, skipping the debounce window
        InputKey::Enter => Some(Message::SubmitSearch),

        // Delete character
        InputKey::Backspace => {
            let mut text = state.browser.search_input.clone();
            text.pop();
            Some(Message::SearchInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        // Type character (regular chars)
        InputKey::Char(c) => {
            let mut text = state.browser.search_input.clone();
            text.push(c);
            Some(Message::SearchInput { text })
        }

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in the detail overlay
fn handle_key_detail(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseDetail),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Edit the record; 'E' submits a full replace instead of a patch
        InputKey::Char('e') if state.role.can_mutate() => Some(Message::OpenEditForm),
        InputKey::Char('E') if state.role.can_mutate() => Some(Message::OpenReplaceForm),

        InputKey::Char('d') | InputKey::Delete if state.role.can_mutate() => {
            Some(Message::RequestDelete)
        }

        _ => None,
    }
}

/// Handle key events in the create/edit form
fn handle_key_edit_form(state: &AppState, key: InputKey) -> Option<Message> {
    let Some(editor) = state.editor.as_ref() else {
        return match key {
            InputKey::Esc => Some(Message::FormCancel),
            InputKey::CharCtrl('c') => Some(Message::Quit),
            _ => None,
        };
    };

    if editor.editing {
        // A field buffer is open; keys edit the buffer
        return match key {
            InputKey::Esc => Some(Message::FormCancelEdit),
            InputKey::Enter => Some(Message::FormCommitEdit),

            InputKey::Backspace => {
                let mut text = editor.edit_buffer.clone();
                text.pop();
                Some(Message::FormEditInput { text })
            }
            InputKey::CharCtrl('u') => Some(Message::FormEditInput {
                text: String::new(),
            }),
            InputKey::Char(c) => {
                let mut text = editor.edit_buffer.clone();
                text.push(c);
                Some(Message::FormEditInput { text })
            }

            InputKey::CharCtrl('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key {
        // Leave the form (asks for confirmation via RequestQuit on 'q')
        InputKey::Esc => Some(Message::FormCancel),
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Field navigation
        InputKey::Up | InputKey::BackTab => Some(Message::FormPrevField),
        InputKey::Down | InputKey::Tab => Some(Message::FormNextField),

        // Edit the selected field (toggles flip in place)
        InputKey::Enter => Some(Message::FormStartEdit),

        // Distribution list entries
        InputKey::Char('a') => Some(Message::FormAddEntry),
        InputKey::Char('x') | InputKey::Delete => Some(Message::FormRemoveEntry),

        // Validate and submit
        InputKey::CharCtrl('s') | InputKey::Char('s') => Some(Message::FormSubmit),

        _ => None,
    }
}

/// Handle key events in the delete confirmation dialog
fn handle_key_confirm_delete(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDelete),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDelete),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        // 'y', 'Y', or 'q' confirms the dialog action
        // Note: 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        // Cancel
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
