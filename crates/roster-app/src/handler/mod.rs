//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `browser`: Collection table, search, sort, pagination, delete
//! - `editor`: Create/edit form handlers
//! - `keys`: Key event handlers for UI modes

pub(crate) mod browser;
pub(crate) mod editor;
pub(crate) mod keys;
pub(crate) mod update;


use roster_core::{Influencer, SortDirection, SortKey, UpdatePayload};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch one collection page
    FetchPage {
        /// Sequence number the completion must echo; older responses are
        /// dropped as stale
        seq: u64,
        page: u64,
        search: String,
        sort_key: SortKey,
        sort_direction: SortDirection,
    },

    /// Fetch one record by identity
    FetchDetail { seq: u64, id: String },

    /// `POST` a new record
    SubmitCreate { draft: Box<Influencer> },

    /// `PUT` the full draft over an existing record
    SubmitReplace { id: String, draft: Box<Influencer> },

    /// `PATCH` the whitelisted fields of an existing record
    SubmitPatch {
        id: String,
        payload: Box<UpdatePayload>,
    },

    /// `DELETE` a record
    DeleteRecord { id: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
