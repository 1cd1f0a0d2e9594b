//! Issue Relay - forwards GitHub "issue created" webhooks to a
//! Slack-compatible chat endpoint.
//!
//! This library provides the delivery intake and deduplication core:
//! envelope unwrapping, a bounded in-memory dedup window, payload
//! validation, and the outbound notifier, orchestrated by [`handler::Relay`].

pub mod config;
pub mod dedup;
pub mod envelope;
pub mod handler;
pub mod notify;
pub mod payload;
pub mod response;
pub mod server;
pub mod types;
