//! REST client for the inquiry collection endpoint.
//!
//! Wraps `POST /api/inquiries` using [`reqwest`] and implements the
//! core's [`InquiryBackend`] seam so the submission pipeline can
//! dispatch through it.  Every request carries a bounded timeout; there
//! is no automatic retry, so a submit dispatches at most once.

use std::time::Duration;

use async_trait::async_trait;

use getaway_core::payload::{CreatedInquiry, InquiryPayload};
use getaway_core::submit::{InquiryBackend, TransportError};

/// Default per-request timeout for the create call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for one inquiry service instance.
pub struct InquiryApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the inquiry REST layer.
#[derive(Debug, thiserror::Error)]
pub enum InquiryApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Inquiry API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for diagnostics.
        body: String,
    },
}

impl InquiryApi {
    /// Create a client with the default request timeout.
    ///
    /// * `base_url` - service base URL, e.g. `https://host` (the `/api`
    ///   prefix is appended per request).
    pub fn new(base_url: String) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client construction only fails on TLS backend misconfiguration");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Service base URL (without the `/api` prefix).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new inquiry record.
    ///
    /// Sends a `POST /api/inquiries` request with the normalized payload
    /// and returns the server-assigned record on success.
    pub async fn create_inquiry(
        &self,
        payload: &InquiryPayload,
    ) -> Result<CreatedInquiry, InquiryApiError> {
        let response = self
            .client
            .post(format!("{}/api/inquiries", self.base_url))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InquiryApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<CreatedInquiry>().await?)
    }
}

impl From<InquiryApiError> for TransportError {
    fn from(err: InquiryApiError) -> Self {
        match err {
            InquiryApiError::Request(e) => TransportError {
                status: e.status().map(|s| s.as_u16()),
                detail: e.to_string(),
            },
            InquiryApiError::Api { status, body } => TransportError {
                status: Some(status),
                detail: body,
            },
        }
    }
}

#[async_trait]
impl InquiryBackend for InquiryApi {
    async fn create_inquiry(
        &self,
        payload: &InquiryPayload,
    ) -> Result<CreatedInquiry, TransportError> {
        match InquiryApi::create_inquiry(self, payload).await {
            Ok(created) => {
                tracing::info!(inquiry_id = %created.id, "Inquiry created");
                Ok(created)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Inquiry submission failed");
                Err(e.into())
            }
        }
    }
}
