//! Outbound notification to the chat endpoint.
//!
//! Builds the `{"text": "Issue Created: <url>"}` message and POSTs it to a
//! Slack-compatible incoming webhook. The message is serialized through
//! serde, so the surrounding JSON is always well-formed no matter what the
//! URL contains. The remote's response body is returned verbatim; the
//! handler echoes it back to the invoker.
//!
//! No retries: a failed or non-2xx outbound call is a fatal error for the
//! invocation. Retry policy, if wanted, belongs to whatever sits in front
//! of this relay.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when forwarding a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request could not be sent, or the endpoint answered non-2xx.
    #[error("chat endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The outbound message could not be serialized.
    #[error("failed to encode outbound message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The outbound chat message body.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    text: &'a str,
}

/// Client for the configured chat endpoint.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    endpoint: String,
}

impl Notifier {
    /// Creates a notifier targeting the given incoming-webhook URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Notifier {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POSTs an "Issue Created" message for `issue_url` and returns the
    /// endpoint's response body as text.
    pub async fn notify_issue_created(&self, issue_url: &str) -> Result<String, NotifyError> {
        let text = format!("Issue Created: {}", issue_url);
        let body = serde_json::to_string(&ChatMessage { text: &text })?;

        debug!(issue_url = %issue_url, "Forwarding issue notification");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

impl std::fmt::Debug for Notifier {
    // Incoming-webhook URLs embed a secret token; keep them out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier").finish_non_exhaustive()
    }
}
