//! Structured key-value fields for log records
//!
//! Fields attach per-record context only. There is no persistent
//! logger-level context: every record carries exactly what its call site
//! supplied, so no state leaks between calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for the JSON encoding
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Per-record structured fields.
///
/// Backed by a `BTreeMap` so encoded output has a stable key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fields {
    entries: BTreeMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a field, consuming and returning self
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Add a field in place
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.entries.iter()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format as space-separated key=value pairs
    pub fn format_pairs(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_creation() {
        let fields = Fields::new();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_fields_with_values() {
        let fields = Fields::new()
            .with("user_id", 123)
            .with("username", "john_doe")
            .with("active", true);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("user_id"), Some(&FieldValue::Int(123)));
    }

    #[test]
    fn test_format_pairs_is_ordered() {
        let fields = Fields::new().with("zeta", 1).with("alpha", 2);
        assert_eq!(fields.format_pairs(), "alpha=2 zeta=1");
    }

    #[test]
    fn test_field_value_json() {
        assert_eq!(
            FieldValue::from("x").to_json_value(),
            serde_json::Value::String("x".to_string())
        );
        assert_eq!(FieldValue::Null.to_json_value(), serde_json::Value::Null);
        // NaN has no JSON representation
        assert_eq!(
            FieldValue::Float(f64::NAN).to_json_value(),
            serde_json::Value::Null
        );
    }
}
