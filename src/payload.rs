//! Issue payload validation and URL extraction.
//!
//! The only field this relay cares about is `issue.html_url`. The payload
//! is parsed into a generic JSON tree and the path is navigated with
//! explicit presence checks, so a missing field is a recoverable
//! validation failure rather than a crash.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when validating the inner payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The inner payload is not valid JSON. Fatal: nothing can be
    /// extracted from an unparseable payload.
    #[error("invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `issue.html_url` is absent or null. Recoverable: the handler turns
    /// this into a 400 response.
    #[error("payload must contain issue.html_url")]
    MissingIssueUrl,
}

/// Parses the inner payload and extracts the issue URL.
///
/// Returns [`PayloadError::MissingIssueUrl`] if the `issue` object is
/// absent, or `html_url` is absent, null, or not a string.
pub fn extract_issue_url(payload: &str) -> Result<String, PayloadError> {
    let value: Value = serde_json::from_str(payload)?;

    value
        .get("issue")
        .and_then(|issue| issue.get("html_url"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(PayloadError::MissingIssueUrl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_url_from_valid_payload() {
        let payload = json!({
            "issue": { "html_url": "https://github.com/x/y/issues/1" }
        })
        .to_string();

        let url = extract_issue_url(&payload).unwrap();
        assert_eq!(url, "https://github.com/x/y/issues/1");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let payload = json!({
            "action": "opened",
            "issue": {
                "number": 1,
                "html_url": "https://github.com/x/y/issues/1",
                "title": "Something broke"
            },
            "repository": { "name": "y" }
        })
        .to_string();

        let url = extract_issue_url(&payload).unwrap();
        assert_eq!(url, "https://github.com/x/y/issues/1");
    }

    #[test]
    fn missing_issue_object_is_a_validation_failure() {
        let payload = json!({ "action": "opened" }).to_string();

        let result = extract_issue_url(&payload);
        assert!(matches!(result, Err(PayloadError::MissingIssueUrl)));
    }

    #[test]
    fn missing_html_url_is_a_validation_failure() {
        let payload = json!({ "issue": { "number": 1 } }).to_string();

        let result = extract_issue_url(&payload);
        assert!(matches!(result, Err(PayloadError::MissingIssueUrl)));
    }

    #[test]
    fn null_html_url_is_a_validation_failure() {
        let payload = json!({ "issue": { "html_url": null } }).to_string();

        let result = extract_issue_url(&payload);
        assert!(matches!(result, Err(PayloadError::MissingIssueUrl)));
    }

    #[test]
    fn non_string_html_url_is_a_validation_failure() {
        let payload = json!({ "issue": { "html_url": 42 } }).to_string();

        let result = extract_issue_url(&payload);
        assert!(matches!(result, Err(PayloadError::MissingIssueUrl)));
    }

    #[test]
    fn unparseable_payload_is_a_hard_failure() {
        let result = extract_issue_url("{not json");
        assert!(matches!(result, Err(PayloadError::Json(_))));
    }
}
