//! Response envelope for the collection API
//!
//! Every endpoint wraps its payload in `{success, message, data, ...}`;
//! list responses add pagination counters. All counters are optional on
//! the wire, with fallbacks applied by the client.

use serde::Deserialize;

use roster_core::Influencer;

/// The API's response wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub data: Option<T>,

    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u64>,

    #[serde(rename = "currentPage", default)]
    pub current_page: Option<u64>,

    #[serde(rename = "totalInfluencers", default)]
    pub total_records: Option<u64>,
}

impl<T> Envelope<T> {
    /// Server message when present and non-blank, otherwise `fallback`.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => fallback,
        }
    }
}

/// One resolved page of the collection list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPage {
    pub items: Vec<Influencer>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_records: u64,
}
