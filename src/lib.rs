// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // loading + constants
pub mod errors;     // error handling
pub mod observability;
pub mod processors; // configurable processor
pub mod traits;     // unified abstractions
pub mod utils;      // sum, pretty json, fetch
