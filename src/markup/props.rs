use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::register::Registration;

/// A single prop value carried by an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Binding to the form's tracked-value store. Never rendered as an attribute.
    Registration(Registration),
    Date(NaiveDate),
}

impl PropValue {
    /// Truthiness used for `checked` defaults: empty text, zero and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
            PropValue::Registration(_) | PropValue::Date(_) => true,
        }
    }

    /// Attribute text for the value, if it has one.
    pub fn as_text(&self) -> Option<String> {
        match self {
            PropValue::Bool(b) => Some(b.to_string()),
            PropValue::Number(n) => Some(format_number(*n)),
            PropValue::Text(s) => Some(s.clone()),
            PropValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            PropValue::Registration(_) => None,
        }
    }

    /// Convert a raw JSON field value. `null` has no prop representation.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(PropValue::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(PropValue::Number),
            serde_json::Value::String(s) => Some(PropValue::Text(s.clone())),
            other => Some(PropValue::Text(other.to_string())),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<NaiveDate> for PropValue {
    fn from(d: NaiveDate) -> Self {
        PropValue::Date(d)
    }
}

/// Key/value props of an element, kept in key order so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when a value is present; `None` leaves the key absent.
    pub fn with_opt<V: Into<PropValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.insert(key, v);
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(PropValue::as_text)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
        self.0.iter()
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn extend(&mut self, other: &Props) {
        for (k, v) in other.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }
}

impl FromIterator<(String, PropValue)> for Props {
    fn from_iter<T: IntoIterator<Item = (String, PropValue)>>(iter: T) -> Self {
        Props(iter.into_iter().collect())
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Merge prop layers in order. A later layer wins on key collision, so the
/// caller's own props always go last.
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a Props>) -> Props {
    let mut merged = Props::new();
    for layer in layers {
        merged.extend(layer);
    }
    merged
}
