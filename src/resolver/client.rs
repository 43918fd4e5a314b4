//! Lookup service HTTP client
//!
//! Resolves a NetEase song id into a direct link and display metadata via
//! the public lookup service. See the DTO module for the response shape.
//!
//! ## Service Quirks
//!
//! ### Status codes
//! The service answers `200` with an empty array (or an object) for unknown
//! ids rather than `404`. Both end up as the unresolved record; only
//! transport failures and non-2xx statuses are reported as errors.
//!
//! ### Timeouts
//! The service occasionally stalls without closing the connection. Every
//! request carries the configured timeout so a lookup can't hang forever.

use std::time::Duration;

use super::{adapter, domain::LookupError, domain::ResolvedMusic, dto};
use crate::config::LookupConfig;

/// Lookup service client
pub struct LookupClient {
    http_client: reqwest::Client,
    endpoint: String,
    default_cover: String,
}

impl LookupClient {
    /// Create a new client from lookup settings
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses
    /// - Give up on requests after `timeout_secs`
    /// - Send the configured User-Agent header
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            default_cover: config.default_cover.clone(),
        })
    }

    /// Create a client for testing with custom endpoint and timeout
    #[cfg(test)]
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint.into(),
            default_cover: super::domain::DEFAULT_COVER.to_string(),
        }
    }

    /// The cover used when the service has none
    pub fn default_cover(&self) -> &str {
        &self.default_cover
    }

    /// Look up a song id and return the resolved record
    pub async fn lookup(&self, id: &str) -> Result<ResolvedMusic, LookupError> {
        if id.is_empty() {
            return Err(LookupError::EmptyIdentifier);
        }

        let response = self.send_lookup_request(id).await?;
        Ok(adapter::to_resolved(response, &self.default_cover))
    }

    /// Build the request URL, appending to any query the endpoint already has
    fn lookup_url(&self, id: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}type=song&id={}",
            self.endpoint,
            separator,
            urlencoding::encode(id)
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_lookup_request(&self, id: &str) -> Result<dto::LookupResponse, LookupError> {
        let url = self.lookup_url(id);
        tracing::debug!("Requesting {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<dto::LookupResponse>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}
