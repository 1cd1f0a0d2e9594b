//! The invocation response envelope.
//!
//! Every recovered outcome — forwarded, duplicate, validation failure — is
//! reported through the same `{statusCode, body, headers}` shape, always
//! with `Content-Type: text/plain`. Fatal errors produce no envelope at
//! all; they surface as invocation failures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response envelope returned to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl ResponseEnvelope {
    fn with_status(status_code: u16, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());

        ResponseEnvelope {
            status_code,
            body: body.into(),
            headers,
        }
    }

    /// A 200 envelope with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    /// A 400 envelope with the given body.
    pub fn bad_request(body: impl Into<String>) -> Self {
        Self::with_status(400, body)
    }
}
