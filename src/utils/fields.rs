//! Loose field access over decoded JSON bodies.
//!
//! The web client is not strict about types: `userId` and `amount` arrive
//! as numbers, everything else as strings. A field counts as present only
//! when it is truthy: not `null`, `false`, `0`, `""`, `[]` or `{}`.

use serde_json::{Map, Value};

pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null      => false,
        Value::Bool(b)   => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a)  => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Renders a scalar the way it should appear inside text: strings bare,
/// everything else as JSON.
pub fn as_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other            => other.to_string(),
    }
}

/// The field as text, if present and truthy.
pub fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).filter(|v| is_truthy(v)).map(as_text)
}

/// The field as text, or `default` when absent or `null`.
///
/// Unlike [`text`], an explicit empty string is kept.
pub fn text_or(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(v)                  => as_text(v),
    }
}

/// The raw field, or `default` as a string when absent or `null`.
pub fn raw_or(obj: &Map<String, Value>, key: &str, default: &str) -> Value {
    match obj.get(key) {
        None | Some(Value::Null) => Value::from(default),
        Some(v)                  => v.clone(),
    }
}

/// The raw field, if present and truthy.
pub fn value(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| is_truthy(v)).cloned()
}
