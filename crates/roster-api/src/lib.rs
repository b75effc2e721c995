//! roster-api: typed HTTP access to the influencer collection service.
//!
//! One [`ApiClient`] per app. Endpoints return domain types from
//! `roster-core`; every failure is already mapped onto the shared error
//! taxonomy, so callers match on [`roster_core::Error`] variants rather
//! than transport details.

pub mod client;
pub mod envelope;

pub use client::ApiClient;
pub use envelope::{Envelope, RecordPage};
