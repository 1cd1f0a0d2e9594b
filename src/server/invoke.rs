//! Invocation endpoint handler.
//!
//! Accepts the raw invocation input as the request body, runs it through
//! the relay, and returns the response envelope as JSON. Fatal relay
//! errors have no envelope; they are rendered as plain HTTP errors here,
//! at the transport boundary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use super::AppState;
use crate::handler::RelayError;
use crate::response::ResponseEnvelope;

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            // The input itself was unusable.
            RelayError::Envelope(_) | RelayError::Payload(_) => StatusCode::BAD_REQUEST,
            // The upstream chat endpoint failed us.
            RelayError::Notify(_) => StatusCode::BAD_GATEWAY,
        };

        (status, self.to_string()).into_response()
    }
}

/// Invocation handler.
///
/// # Request
///
/// - Method: POST
/// - Body: either a gateway envelope (`{"body": "...", "headers": {...}}`)
///   or a bare issue payload
///
/// # Response
///
/// - 200 OK with the JSON response envelope for every recovered outcome
///   (forwarded, duplicate, validation failure — the envelope's own
///   `statusCode` distinguishes them)
/// - 400 Bad Request if the input or inner payload is unparseable
/// - 502 Bad Gateway if the chat endpoint could not be notified
pub async fn invoke_handler(
    State(app_state): State<AppState>,
    input: String,
) -> Result<Json<ResponseEnvelope>, RelayError> {
    match app_state.relay().handle(&input).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => {
            warn!(error = %e, "Invocation failed");
            Err(e)
        }
    }
}
