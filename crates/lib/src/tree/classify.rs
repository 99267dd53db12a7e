//! Conversion of decoded generic data into tree nodes.
//!
//! Decoders hand over their own untyped value (`serde_json::Value`,
//! `serde_yaml::Value`). Every nested mapping becomes an [`Object`], every
//! sequence an [`Array`], and everything else a scalar. Nulls are kept as
//! [`Value::Null`]. The conversion is eager and deep, so no raw decoded value
//! survives inside a tree.

use super::{array::Array, object::Object, value::Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => json_number(&n),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<Array>())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

fn json_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(f) = n.as_f64() {
        // u64 above i64::MAX lands here too
        Value::Float(f)
    } else {
        Value::Text(n.to_string())
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => yaml_number(&n),
            serde_yaml::Value::String(s) => Value::Text(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<Array>())
            }
            serde_yaml::Value::Mapping(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Value::from(v)))
                    .collect::<Object>(),
            ),
            // Tags carry no meaning for a config tree; keep the tagged value
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        Value::Text(n.to_string())
    }
}

/// YAML allows any node as a mapping key; trees only have string keys.
fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
