//! Scalar coercion for request bodies.
//!
//! Clients (and the frontend this API was built for) routinely send numbers
//! as strings, so numeric fields accept either a JSON number or a string
//! that parses as one. Anything else is a coercion failure the caller maps
//! to its own error.

use serde_json::Value as JsonValue;

/// Coerces a JSON value to f64: numbers pass through, numeric strings parse.
pub fn to_number(v: &JsonValue) -> Result<f64, String> {
    if let Some(n) = v.as_f64() {
        return Ok(n);
    }
    if let Some(s) = v.as_str() {
        return s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("expected number, got '{s}'"));
    }
    Err(format!("expected number, got {v}"))
}

/// Coerces a JSON value to i64 for integer fields.
pub fn to_integer(v: &JsonValue) -> Result<i64, String> {
    if let Some(n) = v.as_i64() {
        return Ok(n);
    }
    if let Some(s) = v.as_str() {
        return s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("expected integer, got '{s}'"));
    }
    Err(format!("expected integer, got {v}"))
}

/// JavaScript-style truthiness over JSON values. Creation checks for the
/// string fields use this: `""`, `0`, `false` and `null` all count as
/// missing.
pub fn is_truthy(v: &JsonValue) -> bool {
    match v {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
