// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while assembling a processor configuration from files,
//! the environment, or command-line assignments.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a known format.
    #[error("Unsupported configuration format for '{path}' (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document parsed, but its top level is not a key/value mapping.
    #[error("Configuration must be a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },

    /// A `key=value` assignment was missing the separator or the key.
    #[error("Invalid assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),
}
