// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for remote content retrieval.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// HTTP fetch started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use data_processor::observability::messages::fetch::FetchStarted;
///
/// let msg = FetchStarted { url: "https://example.com" };
/// assert_eq!(msg.to_string(), "Fetching 'https://example.com'");
/// ```
pub struct FetchStarted<'a> {
    pub url: &'a str,
}

impl Display for FetchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Fetching '{}'", self.url)
    }
}

impl StructuredLog for FetchStarted<'_> {
    fn log(&self) {
        tracing::info!(url = self.url, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::INFO, "fetch", name = name, url = self.url)
    }
}

/// HTTP fetch completed and the body was read.
///
/// # Log Level
/// `info!` - Important operational event
pub struct FetchCompleted<'a> {
    pub url: &'a str,
    pub status: u16,
    pub body_size: usize,
    pub duration: Duration,
}

impl Display for FetchCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fetched '{}': status={}, body={} bytes, duration={:?}",
            self.url, self.status, self.body_size, self.duration
        )
    }
}

impl StructuredLog for FetchCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            url = self.url,
            status = self.status,
            body_size = self.body_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "fetch",
            name = name,
            url = self.url,
            status = self.status,
        )
    }
}

/// HTTP fetch failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct FetchFailed<'a> {
    pub url: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FetchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Fetch of '{}' failed: {}", self.url, self.error)
    }
}

impl StructuredLog for FetchFailed<'_> {
    fn log(&self) {
        tracing::error!(url = self.url, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::ERROR, "fetch", name = name, url = self.url)
    }
}
