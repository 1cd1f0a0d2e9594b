//! HTTP front end for the relay.
//!
//! The core handler is transport-agnostic: it takes the raw invocation
//! input and returns a response envelope. This module serves that contract
//! over HTTP:
//!
//! - `POST /invoke` - body is the invocation input; responds with the JSON
//!   response envelope
//! - `GET /health` - returns 200 if the server is running

use std::sync::Arc;

pub mod health;
pub mod invoke;

pub use health::health_handler;
pub use invoke::invoke_handler;

use crate::handler::Relay;

/// Shared application state, passed to handlers via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    relay: Relay,
}

impl AppState {
    pub fn new(relay: Relay) -> Self {
        AppState {
            inner: Arc::new(AppStateInner { relay }),
        }
    }

    /// Returns the relay orchestrator.
    pub fn relay(&self) -> &Relay {
        &self.inner.relay
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/invoke", post(invoke_handler))
        .route("/health", get(health_handler))
        .with_state(app_state)
}
