// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::consts::ENV_PREFIX;
use crate::errors::ConfigError;
use crate::observability::messages::{config::*, StructuredLog};
use crate::processors::Configuration;
use crate::utils::serialize::json_type_name;

/// On-disk configuration format, chosen by file extension.
///
/// # Example
/// ```
/// use data_processor::config::ConfigFormat;
/// use std::path::Path;
///
/// assert_eq!(ConfigFormat::from_path(Path::new("settings.yml")), Some(ConfigFormat::Yaml));
/// assert_eq!(ConfigFormat::from_path(Path::new("settings.ini")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse a document in this format into a configuration.
    ///
    /// An empty or `null` document yields an empty configuration.
    pub fn parse(self, content: &str) -> Result<Configuration, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Configuration::new());
        }

        let value: Value = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => Value::Object(toml_table_to_json(toml::from_str(content)?)),
        };

        match value {
            Value::Object(config) => Ok(config),
            Value::Null => Ok(Configuration::new()),
            other => Err(ConfigError::NotAMapping {
                found: json_type_name(&other),
            }),
        }
    }
}

/// Convert a TOML table, rendering datetimes as their TOML text form.
fn toml_table_to_json(table: toml::Table) -> Configuration {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect()
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        // NaN and infinities have no JSON number form
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(toml_table_to_json(table)),
    }
}

/// Load a configuration from a JSON, YAML or TOML file
pub fn load_configuration<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigError> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let result = read_configuration(path);
    match &result {
        Ok(config) => ConfigurationLoaded {
            source: &source,
            key_count: config.len(),
        }
        .log(),
        Err(error) => ConfigurationLoadFailed {
            source: &source,
            error,
        }
        .log(),
    }
    result
}

fn read_configuration(path: &Path) -> Result<Configuration, ConfigError> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&content)
}

/// Parse `KEY=VALUE` assignments.
///
/// Surrounding whitespace is trimmed from both key and value. A value that is
/// valid JSON keeps its JSON type; anything else is taken as a plain string.
/// Later assignments to the same key win.
///
/// # Example
/// ```
/// use data_processor::config::parse_assignments;
/// use serde_json::json;
///
/// let config = parse_assignments(["output=report.csv", "retries=3"]).unwrap();
/// assert_eq!(config["output"], json!("report.csv"));
/// assert_eq!(config["retries"], json!(3));
/// ```
pub fn parse_assignments<I, S>(pairs: I) -> Result<Configuration, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = Configuration::new();

    for pair in pairs {
        let pair = pair.as_ref();
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidAssignment(pair.to_string()))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidAssignment(pair.to_string()));
        }

        let raw = raw.trim();
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        config.insert(key.to_string(), value);
    }

    Ok(config)
}

/// Collect variables starting with `prefix` as lowercase string-valued keys.
///
/// `DATA_PROCESSOR_OUTPUT=x` becomes `output: "x"`. A variable equal to the
/// bare prefix is ignored.
pub fn configuration_from_vars<I>(vars: I, prefix: &str) -> Configuration
where
    I: IntoIterator<Item = (String, String)>,
{
    let config: Configuration = vars
        .into_iter()
        .filter_map(|(name, value)| {
            let key = name.strip_prefix(prefix)?;
            if key.is_empty() {
                return None;
            }
            Some((key.to_ascii_lowercase(), Value::String(value)))
        })
        .collect();

    EnvironmentKeysCollected {
        prefix,
        key_count: config.len(),
    }
    .log();

    config
}

/// Configuration from the process environment using the default prefix.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn configuration_from_env() -> Configuration {
    let vars = std::env::vars_os().filter_map(|(name, value)| {
        Some((name.into_string().ok()?, value.into_string().ok()?))
    });
    configuration_from_vars(vars, ENV_PREFIX)
}

/// Overlay top-level keys onto `base`; overlay values replace base values.
pub fn merge_configuration(mut base: Configuration, overlay: Configuration) -> Configuration {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}
