//! HTTP client for the influencer collection API.
//!
//! Wraps `reqwest` with the four-step response check every read endpoint
//! needs (HTTP status, blank body, JSON shape, envelope success flag) and
//! typed deserialization into the domain model. Mutating endpoints are
//! acknowledged by HTTP status alone; the server sends no envelope the
//! client needs.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use roster_core::prelude::*;
use roster_core::{Influencer, SortDirection, SortKey, UpdatePayload};

use crate::envelope::{Envelope, RecordPage};

const DEFAULT_BASE_URL: &str = "https://api.phyo.ai/api/";
const RESOURCE: &str = "influencers";
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the influencer collection API.
///
/// Manages the HTTP client, base URL, and page size. Use [`ApiClient::new`]
/// for the production API or [`ApiClient::with_base_url`] to point at a
/// mock server in tests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    page_size: u64,
}

impl ApiClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, page_size: u64) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, page_size)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock, or a self-hosted deployment).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`Error::Config`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64, page_size: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::network(e.to_string()))?;

        // Normalise: ensure the base URL ends with exactly one slash so
        // that path pushes extend the path rather than replacing the last
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| Error::config(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL '{base_url}' cannot carry a resource path"
            )));
        }

        Ok(Self {
            client,
            base_url,
            page_size: page_size.max(1),
        })
    }

    /// Page size sent as the `limit` query parameter.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Fetches one page of the collection.
    ///
    /// `search` is trimmed and omitted from the query entirely when blank.
    /// Missing pagination counters fall back to one page / the requested
    /// page number.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] / [`Error::HttpStatus`] on transport failure.
    /// - [`Error::EmptyResponse`] on a 2xx response with a blank body.
    /// - [`Error::MalformedResponse`] when the body is not JSON.
    /// - [`Error::Application`] when the envelope reports `success: false`.
    pub async fn list(
        &self,
        page: u64,
        search: &str,
        sort_key: SortKey,
        sort_direction: SortDirection,
    ) -> Result<RecordPage> {
        let url = self.list_url(page, search, sort_key, sort_direction);
        debug!("GET {url}");

        let envelope: Envelope<Vec<Influencer>> = self
            .request_envelope(
                self.client.get(url.clone()),
                &format!("GET {url}"),
                "Failed to fetch influencers",
            )
            .await?;

        let items = envelope
            .data
            .ok_or_else(|| Error::application("Failed to fetch influencers"))?;
        let total_records = envelope.total_records.unwrap_or(items.len() as u64);

        Ok(RecordPage {
            items,
            total_pages: envelope.total_pages.unwrap_or(1),
            current_page: envelope.current_page.unwrap_or(page),
            total_records,
        })
    }

    /// Fetches a single record by identity.
    ///
    /// # Errors
    ///
    /// Same classes as [`ApiClient::list`]; the `success: false` fallback
    /// message is "Failed to fetch influencer details".
    pub async fn get(&self, id: &str) -> Result<Influencer> {
        let url = self.record_url(id);
        debug!("GET {url}");

        let envelope: Envelope<Influencer> = self
            .request_envelope(
                self.client.get(url.clone()),
                &format!("GET {url}"),
                "Failed to fetch influencer details",
            )
            .await?;

        envelope
            .data
            .ok_or_else(|| Error::application("Failed to fetch influencer details"))
    }

    /// Creates a record from a full draft. The draft serializes without
    /// identity or timestamps; the server assigns them.
    ///
    /// # Errors
    ///
    /// [`Error::Network`] on transport failure, [`Error::HttpStatus`] on a
    /// non-2xx response.
    pub async fn create(&self, draft: &Influencer) -> Result<()> {
        let url = self.collection_url();
        debug!("POST {url}");
        self.request_ack(self.client.post(url).json(draft)).await
    }

    /// Replaces a record wholesale (`PUT`), from the standalone form.
    ///
    /// # Errors
    ///
    /// [`Error::Network`] on transport failure, [`Error::HttpStatus`] on a
    /// non-2xx response.
    pub async fn replace(&self, id: &str, draft: &Influencer) -> Result<()> {
        let url = self.record_url(id);
        debug!("PUT {url}");
        self.request_ack(self.client.put(url).json(draft)).await
    }

    /// Partially updates a record (`PATCH`). The payload type restricts
    /// the body to the endpoint's field whitelist.
    ///
    /// # Errors
    ///
    /// [`Error::Network`] on transport failure, [`Error::HttpStatus`] on a
    /// non-2xx response.
    pub async fn update(&self, id: &str, payload: &UpdatePayload) -> Result<()> {
        let url = self.record_url(id);
        debug!("PATCH {url}");
        self.request_ack(self.client.patch(url).json(payload)).await
    }

    /// Deletes a record by identity.
    ///
    /// # Errors
    ///
    /// [`Error::Network`] on transport failure, [`Error::HttpStatus`] on a
    /// non-2xx response.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.record_url(id);
        debug!("DELETE {url}");
        self.request_ack(self.client.delete(url)).await
    }

    // ─────────────────────────────────────────────────────────────
    // URL construction
    // ─────────────────────────────────────────────────────────────

    fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(RESOURCE);
        }
        url
    }

    fn record_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([RESOURCE, id]);
        }
        url
    }

    /// Builds the list URL with properly percent-encoded query parameters.
    fn list_url(
        &self,
        page: u64,
        search: &str,
        sort_key: SortKey,
        sort_direction: SortDirection,
    ) -> Url {
        let mut url = self.collection_url();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            pairs.append_pair("limit", &self.page_size.to_string());
            pairs.append_pair("sortBy", sort_key.as_param());
            pairs.append_pair("sortOrder", sort_direction.as_param());
            let search = search.trim();
            if !search.is_empty() {
                pairs.append_pair("search", search);
            }
        }
        url
    }

    // ─────────────────────────────────────────────────────────────
    // Response handling
    // ─────────────────────────────────────────────────────────────

    /// Sends the request and runs the four response checks in order:
    /// HTTP status, blank body, JSON shape, envelope success flag.
    async fn request_envelope<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
        fallback: &str,
    ) -> Result<Envelope<T>> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport)?;
        if body.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::malformed(context, e))?;
        if !envelope.success {
            return Err(Error::application(envelope.message_or(fallback)));
        }
        Ok(envelope)
    }

    /// Sends the request and checks the HTTP status only. Mutating
    /// endpoints reply with no envelope the client relies on.
    async fn request_ack(&self, request: reqwest::RequestBuilder) -> Result<()> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }
        Ok(())
    }
}

/// Map a reqwest failure onto the taxonomy: carry the HTTP status when one
/// exists, otherwise report the network-level cause.
fn transport(err: reqwest::Error) -> Error {
    match err.status() {
        Some(status) => Error::http_status(status.as_u16()),
        None => Error::network(err.to_string()),
    }
}
