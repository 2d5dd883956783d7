// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Small helpers the processor and CLI lean on: summation, pretty JSON
//! rendering and remote content retrieval.

pub mod aggregate;
pub mod fetch;
pub mod serialize;

pub use aggregate::calculate_sum;
pub use fetch::{fetch_url, ContentFetcher, HttpFetcher};
pub use serialize::{json_type_name, to_pretty_json};
