//! Invocation orchestration.
//!
//! [`Relay::handle`] sequences one invocation end to end: unwrap the
//! transport envelope, short-circuit duplicates, validate the payload,
//! forward the notification. Each invocation ends in exactly one terminal
//! state:
//!
//! - duplicate ignored → 200, `"Duplicate delivery ignored"`
//! - validation failed → 400, `"Bad Request: Payload must contain issue.html_url"`
//! - forwarded → 200, the chat endpoint's response body
//! - fatal error → `Err`; no response envelope is fabricated
//!
//! The dedup check happens before validation, and recording is immediate:
//! if the first delivery of an ID later fails validation, a retry of that
//! ID is still a duplicate.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::dedup::DedupCache;
use crate::envelope::{unwrap_envelope, EnvelopeError};
use crate::notify::{Notifier, NotifyError};
use crate::payload::{extract_issue_url, PayloadError};
use crate::response::ResponseEnvelope;

/// Body returned when a delivery ID has already been processed.
pub const DUPLICATE_BODY: &str = "Duplicate delivery ignored";

/// Body returned when the payload lacks `issue.html_url`.
pub const VALIDATION_FAILED_BODY: &str = "Bad Request: Payload must contain issue.html_url";

/// Fatal invocation failures. No response envelope exists for these; they
/// surface to the caller as a failed invocation.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The top-level input could not be parsed.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// The inner payload could not be parsed.
    #[error("invalid payload JSON: {0}")]
    Payload(#[source] serde_json::Error),

    /// The outbound notification failed.
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// The relay orchestrator.
///
/// Holds the shared dedup cache and the chat notifier. Cheap to clone;
/// clones share the same dedup window.
#[derive(Debug, Clone)]
pub struct Relay {
    dedup: Arc<DedupCache>,
    notifier: Notifier,
}

impl Relay {
    pub fn new(dedup: Arc<DedupCache>, notifier: Notifier) -> Self {
        Relay { dedup, notifier }
    }

    /// Processes one invocation.
    ///
    /// `input` is the raw invocation input: either a gateway envelope or a
    /// bare issue payload. Returns the response envelope for all recovered
    /// outcomes and `Err` for fatal ones.
    pub async fn handle(&self, input: &str) -> Result<ResponseEnvelope, RelayError> {
        let (payload, delivery_id) = unwrap_envelope(input)?;

        if let Some(id) = &delivery_id {
            if self.dedup.check_and_record(id) {
                debug!(delivery_id = %id, "Duplicate delivery ignored");
                return Ok(ResponseEnvelope::ok(DUPLICATE_BODY));
            }
        }

        let issue_url = match extract_issue_url(&payload) {
            Ok(url) => url,
            Err(PayloadError::MissingIssueUrl) => {
                warn!(delivery_id = ?delivery_id, "Payload missing issue.html_url");
                return Ok(ResponseEnvelope::bad_request(VALIDATION_FAILED_BODY));
            }
            Err(PayloadError::Json(e)) => return Err(RelayError::Payload(e)),
        };

        let response_body = self.notifier.notify_issue_created(&issue_url).await?;

        info!(
            delivery_id = ?delivery_id,
            issue_url = %issue_url,
            "Issue notification forwarded"
        );

        Ok(ResponseEnvelope::ok(response_body))
    }
}
