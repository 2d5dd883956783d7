// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.
//!
//! This module contains message types for logging events related to:
//! * Configuration files being read and parsed
//! * Environment variables contributing configuration keys
//! * Load failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration loaded from a source.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use data_processor::observability::messages::config::ConfigurationLoaded;
///
/// let msg = ConfigurationLoaded {
///     source: "settings.toml",
///     key_count: 4,
/// };
///
/// assert_eq!(msg.to_string(), "Configuration loaded from 'settings.toml': 4 keys");
/// ```
pub struct ConfigurationLoaded<'a> {
    pub source: &'a str,
    pub key_count: usize,
}

impl Display for ConfigurationLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration loaded from '{}': {} keys",
            self.source, self.key_count
        )
    }
}

impl StructuredLog for ConfigurationLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            key_count = self.key_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "config",
            name = name,
            source = self.source,
            key_count = self.key_count,
        )
    }
}

/// Configuration could not be loaded.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigurationLoadFailed<'a> {
    pub source: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigurationLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to load configuration from '{}': {}",
            self.source, self.error
        )
    }
}

impl StructuredLog for ConfigurationLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            source = self.source,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "config",
            name = name,
            source = self.source,
        )
    }
}

/// Environment variables contributed configuration keys.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct EnvironmentKeysCollected<'a> {
    pub prefix: &'a str,
    pub key_count: usize,
}

impl Display for EnvironmentKeysCollected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Collected {} configuration keys from environment variables prefixed '{}'",
            self.key_count, self.prefix
        )
    }
}

impl StructuredLog for EnvironmentKeysCollected<'_> {
    fn log(&self) {
        tracing::debug!(
            prefix = self.prefix,
            key_count = self.key_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "config",
            name = name,
            prefix = self.prefix,
            key_count = self.key_count,
        )
    }
}
