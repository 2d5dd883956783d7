// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors from remote content retrieval.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or no response was received.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read as text.
    #[error("Failed to read response body from '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
