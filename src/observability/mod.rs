// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic text lives in message structs rather than inline string
//! literals. Each message implements `Display` for human-readable output and
//! `StructuredLog` to emit itself with structured fields at a fixed level.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::processor` - Processor construction events
//! * `messages::config` - Configuration loading events
//! * `messages::fetch` - Remote content retrieval events
//!
//! # Usage
//!
//! ```rust
//! use data_processor::observability::messages::{config::ConfigurationLoaded, StructuredLog};
//!
//! let msg = ConfigurationLoaded {
//!     source: "settings.yaml",
//!     key_count: 3,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
