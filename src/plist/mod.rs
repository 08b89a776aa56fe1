// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! XML property list subset.
//!
//! Only what articulation set documents need: dictionaries, arrays,
//! integers, booleans and strings. Dictionaries keep insertion order so
//! output is deterministic.

pub mod reader;
pub mod writer;

pub use reader::{from_xml_str, PlistError};
pub use writer::{is_xml_text, to_xml_string, write_xml};

/// A property list value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `<integer>`
    Integer(i64),
    /// `<true/>` / `<false/>`
    Boolean(bool),
    /// `<string>`
    String(String),
    /// `<array>`
    Array(Vec<Value>),
    /// `<dict>`
    Dictionary(Dictionary),
}

impl Value {
    /// Get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Get as dictionary
    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Dictionary> for Value {
    fn from(v: Dictionary) -> Self {
        Value::Dictionary(v)
    }
}

/// Ordered key-value mapping
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    entries: Vec<(String, Value)>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_keeps_order() {
        let dict = Dictionary::new()
            .with("Zeta", 1)
            .with("Alpha", "a")
            .with("Mid", true);
        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_dictionary_insert_replaces() {
        let mut dict = Dictionary::new().with("Name", "old").with("ID", 1);
        dict.insert("Name", "new");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("Name").and_then(Value::as_str), Some("new"));
        assert_eq!(dict.keys().next(), Some("Name"));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from(5).as_integer(), Some(5));
        assert_eq!(Value::from(false).as_boolean(), Some(false));
        assert_eq!(Value::from("x").as_integer(), None);
        assert!(Value::from(Vec::<Value>::new()).as_array().unwrap().is_empty());
    }
}
