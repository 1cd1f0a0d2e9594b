//! Transport envelope unwrapping.
//!
//! Invocations arrive in one of two shapes:
//!
//! 1. A gateway-style envelope: `{"body": "<json string>", "headers": {...}}`.
//!    The inner payload is the `body` field, and the delivery ID (if any)
//!    comes from the `X-GitHub-Delivery` header.
//! 2. A raw payload with no envelope. The whole input is the inner payload
//!    and there is no delivery ID.
//!
//! The distinction is made purely on the presence of a non-null `body`
//! field. Header names are matched case-insensitively: gateways do not
//! agree on header casing, so `x-github-delivery` and `X-GitHub-Delivery`
//! must both work.

use serde_json::Value;
use thiserror::Error;

use crate::types::DeliveryId;

/// Header carrying GitHub's unique delivery ID.
const HEADER_DELIVERY: &str = "x-github-delivery";

/// Errors that can occur when unwrapping the transport envelope.
///
/// These are fatal: if the top-level input is not parseable, its shape is
/// unknown and no response envelope can be constructed for it.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Top-level input is not valid JSON.
    #[error("invalid invocation input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unwraps an invocation input into the inner payload and an optional
/// delivery ID.
///
/// Returns the inner payload string to validate, plus the delivery ID if
/// the input was enveloped and carried one. A missing `headers` map or a
/// missing/empty delivery header is not an error.
pub fn unwrap_envelope(input: &str) -> Result<(String, Option<DeliveryId>), EnvelopeError> {
    let value: Value = serde_json::from_str(input)?;

    match value.get("body") {
        Some(body) if !body.is_null() => {
            let inner = match body.as_str() {
                Some(s) => s.to_string(),
                // Some gateways hand over an already-parsed body; use its
                // JSON text as the inner payload.
                None => body.to_string(),
            };

            let delivery_id = value
                .get("headers")
                .and_then(Value::as_object)
                .and_then(extract_delivery_id);

            Ok((inner, delivery_id))
        }
        // No envelope: the whole input is the payload.
        _ => Ok((input.to_string(), None)),
    }
}

/// Looks up the delivery header case-insensitively.
///
/// Whitespace-only values are treated as absent: an ID that can't identify
/// anything is no better than no ID.
fn extract_delivery_id(headers: &serde_json::Map<String, Value>) -> Option<DeliveryId> {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(HEADER_DELIVERY))
        .and_then(|(_, v)| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(DeliveryId::new)
}
