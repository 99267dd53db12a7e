//! Best-effort casts behind the typed accessors.
//!
//! Each cast returns `None` when the value has no sensible reading as the
//! requested type; callers fall back to their default.

use super::value::Value;

pub(crate) fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Text(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Float(n) if n.is_finite() => Some(n.trunc() as i64),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|n| n.is_finite()).map(|n| n.trunc() as i64))
        }
        _ => None,
    }
}

pub(crate) fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Float(n) => Some(*n),
        Value::Int(n) => Some(*n as f64),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(n) => Some(*n != 0),
        Value::Float(n) => Some(*n != 0.0),
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "t" | "true" | "y" | "yes" | "on" => Some(true),
            "" | "0" | "f" | "false" | "n" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
