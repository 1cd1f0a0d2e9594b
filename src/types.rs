//! Newtype wrappers for domain identifiers.
//!
//! Wrapping the delivery ID in its own type keeps it from being confused
//! with other strings flowing through the handler (payloads, URLs, response
//! bodies) and makes the dedup cache's keys self-documenting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A GitHub webhook delivery ID, taken from the `X-GitHub-Delivery` header.
///
/// Uniquely identifies one delivery attempt. Not guaranteed to be present
/// on every invocation (direct payloads carry no headers at all).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryId(pub String);

impl DeliveryId {
    pub fn new(s: impl Into<String>) -> Self {
        DeliveryId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the ID is empty. Empty IDs cannot identify a
    /// delivery and are never deduplicated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeliveryId {
    fn from(s: String) -> Self {
        DeliveryId(s)
    }
}
