//! Create/edit form handlers.
//!
//! The form is a flat field list over an [`Influencer`] draft. Edits go
//! through a text buffer and are committed per field; submit validates the
//! whole draft and only then hands it to the event loop.

use roster_core::prelude::*;
use roster_core::validate;

use crate::form::{self, FieldKind};
use crate::message::Message;
use crate::state::{AppState, EditorState, SubmitIntent, UiMode};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────────────────
// Opening and closing
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_open_create(state: &mut AppState) -> UpdateResult {
    if !state.role.can_mutate() {
        return UpdateResult::none();
    }
    state.editor = Some(EditorState::create());
    state.ui_mode = UiMode::EditForm;
    UpdateResult::none()
}

/// Open the form over the record in the detail overlay. `full_replace`
/// picks between the whitelisted partial update and a wholesale `PUT`.
pub(crate) fn handle_open_edit(state: &mut AppState, full_replace: bool) -> UpdateResult {
    if !state.role.can_mutate() {
        return UpdateResult::none();
    }
    let Some(record) = state
        .detail
        .record
        .as_deref()
        .filter(|record| !record.id.is_empty())
        .cloned()
    else {
        return UpdateResult::none();
    };

    state.editor = Some(if full_replace {
        EditorState::replace(record)
    } else {
        EditorState::patch(record)
    });
    state.ui_mode = UiMode::EditForm;
    UpdateResult::none()
}

/// Drop the draft and fall back to wherever the form was opened from.
pub(crate) fn handle_cancel(state: &mut AppState) -> UpdateResult {
    state.close_editor();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Field navigation and editing
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_next_field(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.select_next();
    }
    UpdateResult::none()
}

pub(crate) fn handle_prev_field(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.select_previous();
    }
    UpdateResult::none()
}

/// Enter on a field. Toggle fields flip in place; heading rows do nothing;
/// everything else opens the text buffer seeded with the current value.
pub(crate) fn handle_start_edit(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };
    let fields = editor.fields();
    let Some(field) = fields.get(editor.selected_index) else {
        return UpdateResult::none();
    };

    match field.kind {
        FieldKind::GenderToggle => form::toggle_gender(&mut editor.draft),
        FieldKind::ListHeading(_) => {}
        _ => editor.start_editing(&field.value),
    }
    UpdateResult::none()
}

pub(crate) fn handle_edit_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        if editor.editing {
            editor.edit_buffer = text;
        }
    }
    UpdateResult::none()
}

/// Commit the buffer into the draft. A parse failure keeps the buffer open
/// with the message in the banner; success clears any stale validation
/// error on that path.
pub(crate) fn handle_commit_edit(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };
    if !editor.editing {
        return UpdateResult::none();
    }
    let fields = editor.fields();
    let Some(field) = fields.get(editor.selected_index) else {
        editor.stop_editing();
        return UpdateResult::none();
    };

    let input = editor.edit_buffer.clone();
    match form::apply_commit(&mut editor.draft, &field.kind, &input) {
        Ok(()) => {
            editor.stop_editing();
            editor.error = None;
            editor.field_errors.retain(|e| e.path != field.path);
        }
        Err(message) => {
            editor.error = Some(message);
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.stop_editing();
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Distribution lists
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_add_entry(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };
    let fields = editor.fields();
    let Some((target, _)) = fields
        .get(editor.selected_index)
        .and_then(|field| field.kind.list_target())
    else {
        return UpdateResult::none();
    };

    form::add_entry(&mut editor.draft, target);
    // The list is no longer empty, so its heading-level error is stale.
    let heading = form::list_path(target);
    editor.field_errors.retain(|e| e.path != heading);
    UpdateResult::none()
}

pub(crate) fn handle_remove_entry(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };
    let fields = editor.fields();
    let Some((target, Some(index))) = fields
        .get(editor.selected_index)
        .and_then(|field| field.kind.list_target())
    else {
        return UpdateResult::none();
    };

    if form::remove_entry(&mut editor.draft, target, index) {
        editor.clamp_selection();
        // Entry indices shifted; every error under this list is stale.
        let prefix = form::list_path(target);
        editor.field_errors.retain(|e| !e.path.starts_with(&prefix));
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Submit
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.role.can_mutate() {
        return UpdateResult::none();
    }
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };
    if editor.submitting {
        return UpdateResult::none();
    }

    let errors = validate::validate(&editor.draft);
    if !errors.is_empty() {
        warn!("Draft failed validation with {} error(s)", errors.len());
        editor.field_errors = errors;
        return UpdateResult::none();
    }

    editor.field_errors.clear();
    editor.error = None;
    editor.submitting = true;

    let action = match &editor.intent {
        SubmitIntent::Create => UpdateAction::SubmitCreate {
            draft: Box::new(editor.draft.clone()),
        },
        SubmitIntent::Patch { id } => UpdateAction::SubmitPatch {
            id: id.clone(),
            payload: Box::new(editor.patch_payload()),
        },
        SubmitIntent::Replace { id } => UpdateAction::SubmitReplace {
            id: id.clone(),
            draft: Box::new(editor.draft.clone()),
        },
    };
    UpdateResult::action(action)
}

/// The server accepted the draft. A create resets to a blank form so the
/// next record can be entered; an update closes the form and overlay back
/// to the table. Both refetch the page so the table shows the change.
pub(crate) fn handle_submit_succeeded(state: &mut AppState) -> UpdateResult {
    let was_create = state
        .editor
        .as_ref()
        .is_some_and(|editor| editor.intent == SubmitIntent::Create);

    if was_create {
        state.editor = Some(EditorState::create());
    } else {
        state.editor = None;
        state.detail.close();
        state.ui_mode = UiMode::Browse;
    }
    UpdateResult::message(Message::FetchPage)
}

/// Keep the form open with the draft intact so the operator can retry.
pub(crate) fn handle_submit_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Submit failed: {error}");
    if let Some(editor) = state.editor.as_mut() {
        editor.submitting = false;
        editor.error = Some(error);
    }
    UpdateResult::none()
}
