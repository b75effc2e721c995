//! # roster-core - Core Domain Types
//!
//! Foundation crate for Roster. Provides the influencer record model, the
//! typed patch/merge utilities, declarative draft validation, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, url, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`model`)
//! - [`Influencer`] - One profile record as stored by the collection API
//! - [`PlatformProfile`] - Per-network analytics sub-document
//! - [`GenderShare`], [`AgeShare`], [`CountryShare`] - Distribution entries
//! - [`CollaborationCharges`] - Four fixed price points per platform
//! - [`SortKey`], [`SortDirection`] - List ordering
//! - [`Role`] - Injected authorization context
//!
//! ### Partial Updates (`patch`)
//! - [`InfluencerPatch`], [`PlatformPatch`], [`ChargesPatch`] - Recursive
//!   sibling-preserving merge over the record shape
//! - [`UpdatePayload`] - The PATCH wire body (whitelisted, dotted keys)
//!
//! ### Validation (`validate`)
//! - [`validate()`] - Pure draft validation against the submission schema
//! - [`FieldError`] - One violation per field path
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with the remote-failure taxonomy
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use roster_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod model;
pub mod patch;
pub mod validate;

/// Prelude for common imports used throughout all Roster crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use model::{
    AgeShare, CollaborationCharges, CountryShare, EntryPatch, Gender, GenderShare, Influencer,
    ListKind, Platform, PlatformProfile, Role, SortDirection, SortKey, COUNTRY_CATEGORY,
};
pub use patch::{ChargesPatch, InfluencerPatch, PlatformPatch, UpdatePayload};
pub use validate::{validate, FieldError};
