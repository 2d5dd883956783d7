// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use crate::config::consts::{FALLBACK_OUTPUT, OUTPUT_KEY};
use crate::observability::messages::{processor::*, StructuredLog};
use crate::traits::Processor;
use crate::utils::serialize::json_type_name;

/// Key/value options a processor is built with.
///
/// Values may be any JSON shape; only `"output"` is interpreted.
pub type Configuration = Map<String, Value>;

/// Configurable processor - resolves the `"output"` option with a fixed fallback.
///
/// The configuration is owned and never mutated after construction. Callers
/// only ever receive copies of it.
///
/// # Example
/// ```
/// use data_processor::processors::{ConfigurableProcessor, Configuration};
/// use serde_json::json;
///
/// let mut config = Configuration::new();
/// config.insert("output".to_string(), json!("report.csv"));
///
/// let processor = ConfigurableProcessor::new(config);
/// assert_eq!(processor.process(), "report.csv");
/// assert_eq!(ConfigurableProcessor::create_default().process(), "default");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurableProcessor {
    config: Configuration,
}

impl ConfigurableProcessor {
    pub fn new(config: Configuration) -> Self {
        let processor = Self { config };
        ProcessorCreated {
            processor_id: processor.name(),
            key_count: processor.config.len(),
        }
        .log();
        processor
    }

    /// Build from an arbitrary JSON value.
    ///
    /// Anything other than an object (including `null`) becomes an empty
    /// configuration, so `process()` stays total.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(config) => Self::new(config),
            other => {
                ConfigurationNormalized {
                    processor_id: "configurable",
                    found: json_type_name(&other),
                }
                .log();
                Self::new(Configuration::new())
            }
        }
    }

    /// Processor configured with `{ "output": "default" }`.
    pub fn create_default() -> Self {
        let mut config = Configuration::new();
        config.insert(
            OUTPUT_KEY.to_string(),
            Value::String(FALLBACK_OUTPUT.to_string()),
        );
        Self::new(config)
    }

    /// Resolve the configured output.
    ///
    /// Only a JSON string is accepted; a missing key or any other value type
    /// yields `"default"`.
    pub fn process(&self) -> &str {
        match self.config.get(OUTPUT_KEY) {
            Some(Value::String(output)) => output,
            _ => FALLBACK_OUTPUT,
        }
    }

    /// Independent copy of the configuration.
    pub fn get_config(&self) -> Configuration {
        self.config.clone()
    }
}

impl From<Configuration> for ConfigurableProcessor {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}

impl From<Option<Configuration>> for ConfigurableProcessor {
    fn from(config: Option<Configuration>) -> Self {
        Self::new(config.unwrap_or_default())
    }
}

impl Processor for ConfigurableProcessor {
    fn process(&self) -> &str {
        ConfigurableProcessor::process(self)
    }

    fn name(&self) -> &'static str {
        "configurable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_from(value: Value) -> Configuration {
        match value {
            Value::Object(map) => map,
            other => panic!("test fixture must be an object, got {}", other),
        }
    }

    #[test]
    fn test_process_returns_configured_string() {
        let processor = ConfigurableProcessor::new(config_from(json!({"output": "report.csv"})));
        assert_eq!(processor.process(), "report.csv");
    }

    #[test]
    fn test_process_returns_string_unmodified() {
        let cases = vec!["", "  padded  ", "default", "ünïcødé ✓", "multi\nline"];

        for output in cases {
            let processor = ConfigurableProcessor::new(config_from(json!({ "output": output })));
            assert_eq!(processor.process(), output);
        }
    }

    #[test]
    fn test_process_empty_config_falls_back() {
        let processor = ConfigurableProcessor::new(Configuration::new());
        assert_eq!(processor.process(), "default");
    }

    #[test]
    fn test_process_missing_key_falls_back() {
        let processor = ConfigurableProcessor::new(config_from(json!({
            "format": "csv",
            "Output": "wrong-case.csv",
        })));
        assert_eq!(processor.process(), "default");
    }

    #[test]
    fn test_process_non_string_output_falls_back() {
        let cases = vec![
            json!(42),
            json!(3.5),
            json!(true),
            json!(null),
            json!(["a.csv", "b.csv"]),
            json!({"path": "nested.csv"}),
        ];

        for value in cases {
            let processor = ConfigurableProcessor::new(config_from(json!({ "output": value.clone() })));
            assert_eq!(processor.process(), "default", "value {} should not be coerced", value);
        }
    }

    #[test]
    fn test_get_config_round_trips() {
        let original = config_from(json!({
            "output": "report.csv",
            "retries": 3,
            "verbose": false,
            "ratio": 0.25,
            "missing": null,
        }));

        let processor = ConfigurableProcessor::new(original.clone());
        assert_eq!(processor.get_config(), original);
    }

    #[test]
    fn test_get_config_returns_independent_copy() {
        let processor = ConfigurableProcessor::new(config_from(json!({"output": "report.csv"})));

        let mut copy = processor.get_config();
        copy.insert("output".to_string(), json!("tampered.csv"));
        copy.insert("extra".to_string(), json!(1));

        assert_eq!(processor.process(), "report.csv");
        assert_eq!(processor.get_config(), config_from(json!({"output": "report.csv"})));

        let mut emptied = processor.get_config();
        emptied.clear();
        assert_eq!(processor.process(), "report.csv");
    }

    #[test]
    fn test_get_config_nested_values_are_independent() {
        let processor = ConfigurableProcessor::new(config_from(json!({
            "output": "report.csv",
            "columns": ["id", "name"],
        })));

        let mut copy = processor.get_config();
        if let Some(Value::Array(columns)) = copy.get_mut("columns") {
            columns.push(json!("email"));
        }

        assert_eq!(processor.get_config()["columns"], json!(["id", "name"]));
    }

    #[test]
    fn test_create_default() {
        let processor = ConfigurableProcessor::create_default();
        assert_eq!(processor.process(), "default");
        assert_eq!(processor.get_config(), config_from(json!({"output": "default"})));
    }

    #[test]
    fn test_create_default_instances_are_fresh() {
        let first = ConfigurableProcessor::create_default();
        let mut copy = first.get_config();
        copy.insert("output".to_string(), json!("changed"));

        let second = ConfigurableProcessor::create_default();
        assert_eq!(second.process(), "default");
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_value_normalizes_non_objects() {
        let cases = vec![json!(null), json!(42), json!("output"), json!([{"output": "x"}])];

        for value in cases {
            let processor = ConfigurableProcessor::from_value(value);
            assert!(processor.get_config().is_empty());
            assert_eq!(processor.process(), "default");
        }
    }

    #[test]
    fn test_from_value_accepts_objects() {
        let processor = ConfigurableProcessor::from_value(json!({"output": "out.json"}));
        assert_eq!(processor.process(), "out.json");
    }

    #[test]
    fn test_from_missing_configuration() {
        let processor = ConfigurableProcessor::from(None);
        assert_eq!(processor.process(), "default");
        assert!(processor.get_config().is_empty());
    }

    #[test]
    fn test_trait_object_dispatch() {
        let processor: Box<dyn Processor> =
            Box::new(ConfigurableProcessor::new(config_from(json!({"output": "via-trait"}))));
        assert_eq!(processor.name(), "configurable");
        assert_eq!(processor.process(), "via-trait");
    }
}
