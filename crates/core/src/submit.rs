//! The one-shot submission pipeline.
//!
//! [`SubmitPipeline::submit`] takes the draft through required-field
//! validation and normalization, then hands it to the external inquiry
//! service exactly once.  An atomic in-flight latch guarantees at most
//! one outstanding dispatch; re-entrant submits are rejected, never
//! queued.  The pipeline never mutates the draft: a failed submission
//! must never lose the traveller's data, so resetting after success is
//! the caller's move.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::draft::Draft;
use crate::payload::{CreatedInquiry, InquiryPayload};

/// Fields that must be non-empty (after trimming) before dispatch.
pub const REQUIRED_FIELDS: &[&str] = &["first_name", "last_name", "email", "destinations"];

/// A failure reaching or speaking to the inquiry service.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Inquiry service error{}: {detail}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
pub struct TransportError {
    /// HTTP status code, when the service answered at all.
    pub status: Option<u16>,
    /// Best-available diagnostic message.
    pub detail: String,
}

/// Everything that can go wrong during a submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Required fields were empty; nothing was dispatched.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The create operation failed.  The draft is preserved and the
    /// traveller may retry.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Another submission is still outstanding.  Callers treat this as
    /// ignorable; the earlier dispatch proceeds untouched.
    #[error("A submission is already in progress")]
    InFlight,
}

/// The external create operation the wizard hands finished drafts to.
#[async_trait]
pub trait InquiryBackend: Send + Sync {
    async fn create_inquiry(
        &self,
        payload: &InquiryPayload,
    ) -> Result<CreatedInquiry, TransportError>;
}

/// Drives validation, normalization, and the one-shot dispatch.
pub struct SubmitPipeline<B: InquiryBackend> {
    backend: B,
    in_flight: AtomicBool,
}

impl<B: InquiryBackend> SubmitPipeline<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a dispatch is currently outstanding.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// The backend this pipeline dispatches to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate, normalize, and dispatch the draft.
    ///
    /// Halts before any network effect when required fields are missing.
    /// At most one dispatch can be outstanding at a time; concurrent
    /// calls get [`SubmitError::InFlight`].
    pub async fn submit(&self, draft: &Draft) -> Result<CreatedInquiry, SubmitError> {
        let missing = missing_required(draft);
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        let payload = InquiryPayload::from_draft(draft);

        // Read-before-set: only one caller wins the latch.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SubmitError::InFlight);
        }

        let result = self.backend.create_inquiry(&payload).await;
        self.in_flight.store(false, Ordering::SeqCst);

        Ok(result?)
    }
}

/// Which required fields are empty after trimming, in display order.
pub fn missing_required(draft: &Draft) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if draft.first_name.trim().is_empty() {
        missing.push("first_name");
    }
    if draft.last_name.trim().is_empty() {
        missing.push("last_name");
    }
    if draft.email.trim().is_empty() {
        missing.push("email");
    }
    if draft.destinations.trim().is_empty() {
        missing.push("destinations");
    }
    missing
}
