//! Message types for the application (TEA pattern)

use roster_api::RecordPage;
use roster_core::{Influencer, SortKey};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (debounce deadlines, spinner)
    Tick,

    /// Request to quit (asks for confirmation while a form is open)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Browser Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the collection with the current page/search/sort parameters
    FetchPage,

    /// List fetch landed
    PageLoaded { seq: u64, page: RecordPage },

    /// List fetch failed
    PageLoadFailed { seq: u64, error: String },

    /// Enter search input mode
    StartSearch,

    /// Replace the search text (restarts the debounce window)
    SearchInput { text: String },

    /// Submit the search immediately and exit input mode
    SubmitSearch,

    /// Exit input mode, keeping the text and any pending debounce
    CloseSearch,

    /// Select a sort column; selecting the active column flips direction
    SortBy { key: SortKey },

    NextPage,
    PrevPage,

    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,

    // ─────────────────────────────────────────────────────────
    // Detail Messages
    // ─────────────────────────────────────────────────────────
    /// Open the detail overlay for the record under the cursor
    OpenDetail,

    /// Detail fetch landed
    DetailLoaded { seq: u64, record: Box<Influencer> },

    /// Detail fetch failed
    DetailLoadFailed { seq: u64, error: String },

    CloseDetail,

    // ─────────────────────────────────────────────────────────
    // Delete Messages
    // ─────────────────────────────────────────────────────────
    /// Ask for confirmation before deleting the selected record
    RequestDelete,

    /// Confirm the pending delete
    ConfirmDelete,

    /// Dismiss the delete dialog
    CancelDelete,

    DeleteSucceeded,
    DeleteFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Open the form over a blank draft
    OpenCreateForm,

    /// Open the form over the detail record; submit sends the whitelisted
    /// partial update
    OpenEditForm,

    /// Open the form over the detail record; submit replaces it wholesale
    OpenReplaceForm,

    FormNextField,
    FormPrevField,

    /// Begin editing the selected field (toggle fields flip in place)
    FormStartEdit,

    /// Replace the edit buffer
    FormEditInput { text: String },

    /// Commit the buffer into the draft
    FormCommitEdit,

    /// Abandon the buffer
    FormCancelEdit,

    /// Append a blank entry to the list under the selected row
    FormAddEntry,

    /// Remove the entry under the selected row
    FormRemoveEntry,

    /// Validate the draft and submit it
    FormSubmit,

    /// Close the form, dropping the draft
    FormCancel,

    SubmitSucceeded,
    SubmitFailed { error: String },
}
