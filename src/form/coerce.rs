use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::markup::props::PropValue;

/// Coerce a raw submitted string according to a field's schema fragment.
///
/// The shape is a JSON-schema-like object: `type` is one of `boolean`,
/// `number`, `integer`, `string`; `format: "date"` marks dates; `nullable`
/// turns empty strings into `null`. Anything unparseable passes through as
/// the raw string so validation can report it.
pub fn coerce_value(raw: &str, shape: Option<&Value>) -> Value {
    let Some(shape) = shape else {
        return Value::String(raw.to_string());
    };

    let kind = shape.get("type").and_then(Value::as_str).unwrap_or("string");
    let nullable = shape
        .get("nullable")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let is_date = shape.get("format").and_then(Value::as_str) == Some("date");

    match kind {
        "boolean" => Value::Bool(matches!(raw, "on" | "true")),
        "number" | "integer" => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Value::Null;
            }
            if kind == "integer" {
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Value::from(n);
                }
            }
            match trimmed.parse::<f64>() {
                Ok(n) => serde_json::Number::from_f64(n)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(raw.to_string())),
                Err(_) => Value::String(raw.to_string()),
            }
        }
        _ if is_date => {
            if raw.trim().is_empty() {
                Value::Null
            } else {
                Value::String(raw.to_string())
            }
        }
        _ => {
            if raw.is_empty() && nullable {
                Value::Null
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

/// Parse a raw date value. `YYYY-MM-DD` and RFC 3339 strings become dates;
/// anything else passes through unchanged.
pub fn parse_date(raw: &Value) -> Option<PropValue> {
    if let Value::String(s) = raw {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(PropValue::Date(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(PropValue::Date(dt.date_naive()));
        }
    }
    PropValue::from_json(raw)
}
