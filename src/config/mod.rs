// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;

pub mod consts;

pub use loader::{
    configuration_from_env, configuration_from_vars, load_configuration, merge_configuration,
    parse_assignments, ConfigFormat,
};
