//! Truthiness of JSON values.
//!
//! A value is falsy when it is `null`, `false`, a zero number or the empty
//! string. Everything else, including empty arrays and objects, is truthy.

use serde_json::Value;

/// Check whether a JSON value counts as "set" for a reserved payload field.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_f64() {
            Some(f) => f != 0.0 && !f.is_nan(),
            None => true,
        },
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
