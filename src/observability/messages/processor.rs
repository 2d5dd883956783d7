// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor lifecycle events.
//!
//! Only construction is logged. Resolving the output never logs, including
//! when it falls back to the default value.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor constructed from a configuration.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
///
/// # Example
/// ```
/// use data_processor::observability::messages::processor::ProcessorCreated;
///
/// let msg = ProcessorCreated {
///     processor_id: "configurable",
///     key_count: 2,
/// };
///
/// assert_eq!(msg.to_string(), "Processor 'configurable' created with 2 configuration keys");
/// ```
pub struct ProcessorCreated<'a> {
    pub processor_id: &'a str,
    pub key_count: usize,
}

impl Display for ProcessorCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' created with {} configuration keys",
            self.processor_id, self.key_count
        )
    }
}

impl StructuredLog for ProcessorCreated<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            key_count = self.key_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "processor",
            name = name,
            processor_id = self.processor_id,
            key_count = self.key_count,
        )
    }
}

/// Construction input was not a mapping and was replaced by an empty one.
///
/// # Log Level
/// `debug!` - Input normalization, not a failure
pub struct ConfigurationNormalized<'a> {
    pub processor_id: &'a str,
    pub found: &'static str,
}

impl Display for ConfigurationNormalized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' received {} instead of a mapping; using an empty configuration",
            self.processor_id, self.found
        )
    }
}

impl StructuredLog for ConfigurationNormalized<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            found = self.found,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "processor",
            name = name,
            processor_id = self.processor_id,
            found = self.found,
        )
    }
}
