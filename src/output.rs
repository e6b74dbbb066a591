//! Rendering produced values as JSON or YAML text.
//!
//! - **Compact JSON** via [`to_json()`]
//! - **Pretty JSON** via [`to_json_pretty()`] - 3-space indentation
//! - **YAML** via [`to_yaml()`]
//! - **Whole forests** via [`render_forest()`]
//!
//! Object fields come out in the order they were first written in the
//! expression.
//!
//! # Examples
//!
//! ```
//! use clon::Value;
//! use clon::output::{to_json, to_json_pretty};
//!
//! let value = Value::Object(vec![("a".to_string(), Value::Integer(1))]);
//!
//! assert_eq!(to_json(&value).unwrap(), r#"{"a":1}"#);
//! assert_eq!(to_json_pretty(&value).unwrap(), "{\n   \"a\": 1\n}");
//! ```

use std::string::FromUtf8Error;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::{ast::Generator, value::Value};

const JSON_INDENT: &[u8] = b"   ";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("serialized output is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Text format for rendered documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Convert a produced [`Value`] into a `serde_json::Value`.
///
/// Object field order is kept. Non-finite floats have no JSON form and
/// become `null`.
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s),
        Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(value_to_json).collect())
        }
        Value::Object(fields) => serde_json::Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k, value_to_json(v)))
                .collect(),
        ),
    }
}

/// Converts a Value to compact JSON.
pub fn to_json(value: &Value) -> Result<String, RenderError> {
    Ok(serde_json::to_string(&value_to_json(value.clone()))?)
}

/// Converts a Value to JSON indented with three spaces per level.
pub fn to_json_pretty(value: &Value) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    value_to_json(value.clone()).serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Converts a Value to a YAML document.
pub fn to_yaml(value: &Value) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(&value_to_json(value.clone()))?)
}

/// Render every root of a forest.
///
/// JSON documents are pretty-printed, one after another, each ending with a
/// newline. YAML documents are separated by `---` lines.
pub fn render_forest(forest: &[Generator], format: OutputFormat) -> Result<String, RenderError> {
    let mut out = String::new();
    for (idx, root) in forest.iter().enumerate() {
        let value = root.produce();
        match format {
            OutputFormat::Json => {
                out.push_str(&to_json_pretty(&value)?);
                out.push('\n');
            }
            OutputFormat::Yaml => {
                if idx > 0 {
                    out.push_str("---\n");
                }
                out.push_str(&to_yaml(&value)?);
            }
        }
    }
    Ok(out)
}
