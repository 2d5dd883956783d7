// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A processor resolves a display value from the state it was built with.
///
/// Resolution is total: implementations return a fallback instead of failing.
pub trait Processor: Send + Sync {
    fn process(&self) -> &str;

    fn name(&self) -> &'static str;
}
