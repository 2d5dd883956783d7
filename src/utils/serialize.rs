// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::Value;

/// Render any serializable value as two-space indented JSON.
///
/// # Example
///
/// ```rust
/// use data_processor::utils::to_pretty_json;
/// use serde_json::json;
///
/// let rendered = to_pretty_json(&json!({"output": "report.csv"})).unwrap();
/// assert_eq!(rendered, "{\n  \"output\": \"report.csv\"\n}");
/// ```
pub fn to_pretty_json<T>(data: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(data)
}

/// Human-readable name of a JSON value's variant.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
