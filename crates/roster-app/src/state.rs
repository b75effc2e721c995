//! Application state: the single mutable model behind the TEA update loop.

use std::time::{Duration, Instant};

use roster_core::{
    FieldError, Influencer, ListKind, Platform, Role, SortDirection, SortKey, UpdatePayload,
};

use crate::config::Settings;
use crate::form;

/// Typing pause before a search keystroke triggers a fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Top-level application lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which view owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Paginated table of records.
    #[default]
    Browse,
    /// Typing into the search box.
    SearchInput,
    /// Record detail overlay.
    Detail,
    /// Create or edit form.
    EditForm,
    /// "Are you sure you want to delete" dialog.
    ConfirmDelete,
    /// Quit confirmation while a form holds unsaved edits.
    ConfirmQuit,
}

// ─────────────────────────────────────────────────────────────────────────────
// Browser state
// ─────────────────────────────────────────────────────────────────────────────

/// State for the paginated collection view.
#[derive(Debug, Clone)]
pub struct BrowserState {
    /// Records on the current page.
    pub items: Vec<Influencer>,

    /// Selected row within `items`.
    pub cursor: usize,

    /// 1-based page number currently shown (or being fetched).
    pub page: u64,

    /// Total pages reported by the server (at least 1).
    pub total_pages: u64,

    /// Total records across all pages.
    pub total_records: u64,

    /// Live search text. Doubles as the box contents while typing and the
    /// term a fired debounce sends to the server.
    pub search_input: String,

    /// When the pending search keystroke becomes due. Re-armed on every
    /// keystroke so only the final text triggers a fetch.
    pub search_deadline: Option<Instant>,

    pub sort_key: SortKey,
    pub sort_direction: SortDirection,

    /// A list fetch is in flight.
    pub loading: bool,

    /// Error banner for the last failed list fetch.
    pub error: Option<String>,

    /// Sequence number of the newest list request. Completions carrying an
    /// older number are stale and dropped.
    pub list_seq: u64,

    /// Record id awaiting delete confirmation.
    pub delete_pending: Option<String>,

    /// A delete request is in flight.
    pub deleting: bool,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            page: 1,
            total_pages: 1,
            total_records: 0,
            search_input: String::new(),
            search_deadline: None,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            loading: false,
            error: None,
            list_seq: 0,
            delete_pending: None,
            deleting: false,
        }
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record under the cursor, if the page has any rows.
    pub fn selected(&self) -> Option<&Influencer> {
        self.items.get(self.cursor)
    }

    /// Move the cursor down one row, wrapping at the bottom.
    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1) % self.items.len();
        }
    }

    /// Move the cursor up one row, wrapping at the top.
    pub fn select_previous(&mut self) {
        if !self.items.is_empty() {
            self.cursor = if self.cursor == 0 {
                self.items.len() - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Start a new list fetch: bumps the sequence counter and flips the
    /// loading flag. Returns the sequence number the completion must echo.
    pub fn begin_fetch(&mut self) -> u64 {
        self.list_seq += 1;
        self.loading = true;
        self.error = None;
        self.list_seq
    }

    /// Arm (or re-arm) the search debounce window.
    pub fn arm_search_deadline(&mut self) {
        self.search_deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    /// True when an armed debounce window has elapsed.
    pub fn search_deadline_due(&self, now: Instant) -> bool {
        self.search_deadline.is_some_and(|deadline| now >= deadline)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail state
// ─────────────────────────────────────────────────────────────────────────────

/// State for the record detail overlay.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Fully hydrated record, once the detail fetch lands.
    pub record: Option<Box<Influencer>>,

    /// A detail fetch is in flight.
    pub loading: bool,

    pub error: Option<String>,

    /// Sequence number of the newest detail request. Completions carrying
    /// an older number are stale and dropped, as are completions arriving
    /// after the overlay closed.
    pub seq: u64,
}

impl DetailState {
    /// Start a detail fetch for a fresh record, discarding whatever the
    /// overlay showed before. Returns the sequence number the completion
    /// must echo.
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.record = None;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Reset on overlay close. The sequence counter survives so late
    /// completions from the closed overlay still compare stale.
    pub fn close(&mut self) {
        self.record = None;
        self.loading = false;
        self.error = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor state
// ─────────────────────────────────────────────────────────────────────────────

/// What submitting the form does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitIntent {
    /// `POST` a new record.
    Create,
    /// `PATCH` the whitelisted fields of an existing record.
    Patch { id: String },
    /// `PUT` the full draft over an existing record.
    Replace { id: String },
}

/// State for the create/edit form.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The record as loaded, for cancel/compare. `None` when creating.
    pub snapshot: Option<Box<Influencer>>,

    /// Working copy every field edit lands on.
    pub draft: Influencer,

    pub intent: SubmitIntent,

    /// Selected row in the field list.
    pub selected_index: usize,

    /// Whether we're in edit mode for the current field.
    pub editing: bool,

    /// Text buffer for field editing.
    pub edit_buffer: String,

    /// Validation failures from the last submit attempt.
    pub field_errors: Vec<FieldError>,

    /// Parse or submit error banner.
    pub error: Option<String>,

    /// A submit request is in flight.
    pub submitting: bool,
}

impl EditorState {
    /// Open the form over a blank draft.
    pub fn create() -> Self {
        Self::with_intent(Influencer::blank(), None, SubmitIntent::Create)
    }

    /// Open the form over an existing record for a whitelisted partial
    /// update.
    pub fn patch(record: Influencer) -> Self {
        let id = record.id.clone();
        Self::with_intent(record.clone(), Some(record), SubmitIntent::Patch { id })
    }

    /// Open the form over an existing record for a full replace.
    pub fn replace(record: Influencer) -> Self {
        let id = record.id.clone();
        Self::with_intent(record.clone(), Some(record), SubmitIntent::Replace { id })
    }

    fn with_intent(
        draft: Influencer,
        snapshot: Option<Influencer>,
        intent: SubmitIntent,
    ) -> Self {
        Self {
            snapshot: snapshot.map(Box::new),
            draft,
            intent,
            selected_index: 0,
            editing: false,
            edit_buffer: String::new(),
            field_errors: Vec::new(),
            error: None,
            submitting: false,
        }
    }

    /// Field descriptors for the current draft. Regenerated per call since
    /// list edits change the row count.
    pub fn fields(&self) -> Vec<form::FormField> {
        form::fields(&self.draft)
    }

    /// Select next field.
    pub fn select_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    /// Select previous field.
    pub fn select_previous(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.selected_index = if self.selected_index == 0 {
                count - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Clamp the selection after a list edit shrank the field list.
    pub fn clamp_selection(&mut self) {
        let count = self.fields().len();
        if count > 0 && self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    /// Enter edit mode over the current field value.
    pub fn start_editing(&mut self, initial_value: &str) {
        self.editing = true;
        self.edit_buffer = initial_value.to_string();
        self.error = None;
    }

    /// Exit edit mode.
    pub fn stop_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Whitelisted wire payload for a `Patch` submit.
    pub fn patch_payload(&self) -> UpdatePayload {
        UpdatePayload::from_draft(&self.draft)
    }

    /// Validation errors attached to one field path.
    pub fn errors_for(&self, path: &str) -> Vec<&FieldError> {
        self.field_errors.iter().filter(|e| e.path == path).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application state
// ─────────────────────────────────────────────────────────────────────────────

/// Root state for the TEA loop.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,

    /// Capability context injected at startup. Mutating operations are
    /// refused for read-only roles before any request is made.
    pub role: Role,

    pub phase: AppPhase,
    pub ui_mode: UiMode,

    pub browser: BrowserState,
    pub detail: DetailState,

    /// Present while the create/edit form is open.
    pub editor: Option<EditorState>,

    /// Spinner animation frame, advanced on ticks while loading.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let role = settings.ui.role;
        Self {
            settings,
            role,
            phase: AppPhase::Running,
            ui_mode: UiMode::Browse,
            browser: BrowserState::new(),
            detail: DetailState::default(),
            editor: None,
            spinner_frame: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Quit plumbing
    // ─────────────────────────────────────────────────────────────

    /// Request quit. Asks for confirmation when the form holds unsaved
    /// edits, otherwise quits immediately.
    pub fn request_quit(&mut self) {
        if self.ui_mode == UiMode::EditForm && self.editor.is_some() {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Confirm quit from the dialog.
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit and return to the form.
    pub fn cancel_quit(&mut self) {
        self.ui_mode = if self.editor.is_some() {
            UiMode::EditForm
        } else {
            UiMode::Browse
        };
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────────
    // Editor plumbing
    // ─────────────────────────────────────────────────────────────

    /// Close the form and return to where it was opened from: the detail
    /// overlay when it still shows a record, the table otherwise.
    pub fn close_editor(&mut self) {
        self.editor = None;
        self.ui_mode = if self.detail.record.is_some() {
            UiMode::Detail
        } else {
            UiMode::Browse
        };
    }

    /// Tick the spinner while any request is in flight.
    pub fn tick_spinner(&mut self) {
        let busy = self.browser.loading
            || self.browser.deleting
            || self.detail.loading
            || self.editor.as_ref().is_some_and(|e| e.submitting);
        if busy {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

/// Convenience constructors for list-edit targets shared by the form and
/// the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTarget {
    pub platform: Platform,
    pub kind: ListKind,
}

impl ListTarget {
    pub fn new(platform: Platform, kind: ListKind) -> Self {
        Self { platform, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_selection_wraps() {
        let mut browser = BrowserState::new();
        browser.items = vec![Influencer::blank(), Influencer::blank()];

        browser.select_next();
        assert_eq!(browser.cursor, 1);
        browser.select_next();
        assert_eq!(browser.cursor, 0);
        browser.select_previous();
        assert_eq!(browser.cursor, 1);
    }

    #[test]
    fn test_begin_fetch_bumps_sequence() {
        let mut browser = BrowserState::new();
        assert_eq!(browser.begin_fetch(), 1);
        assert_eq!(browser.begin_fetch(), 2);
        assert!(browser.loading);
    }

    #[test]
    fn test_detail_close_keeps_sequence() {
        let mut detail = DetailState::default();
        let seq = detail.begin_fetch();
        detail.close();
        assert_eq!(detail.seq, seq);
        assert!(detail.record.is_none());
    }

    #[test]
    fn test_quit_confirms_only_with_open_form() {
        let mut state = AppState::new(Settings::default());
        state.request_quit();
        assert!(state.should_quit());

        let mut state = AppState::new(Settings::default());
        state.editor = Some(EditorState::create());
        state.ui_mode = UiMode::EditForm;
        state.request_quit();
        assert_eq!(state.ui_mode, UiMode::ConfirmQuit);
        assert!(!state.should_quit());

        state.cancel_quit();
        assert_eq!(state.ui_mode, UiMode::EditForm);
    }

    #[test]
    fn test_close_editor_returns_to_detail_when_open() {
        let mut state = AppState::new(Settings::default());
        state.detail.record = Some(Box::new(Influencer::blank()));
        state.editor = Some(EditorState::create());
        state.ui_mode = UiMode::EditForm;

        state.close_editor();
        assert_eq!(state.ui_mode, UiMode::Detail);
        assert!(state.editor.is_none());
    }
}
