// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `processor` - Processor construction and normalization events
//! * `config` - Configuration file, environment and assignment events
//! * `fetch` - HTTP retrieval lifecycle events

pub mod config;
pub mod fetch;
pub mod processor;

use tracing::Span;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
