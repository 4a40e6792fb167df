//! Records: insertion-ordered string-keyed maps of values.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::slot::Slot;
use crate::value::Value;

/// A nested key-value record.
///
/// Keys enumerate in insertion order; path enumeration and diffing follow
/// that order. Equality ignores order: two records are equal when they hold
/// the same keys with deeply equal values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a separator-joined path.
    ///
    /// Every key but the last must name a nested record. Sequences are not
    /// indexed into, so `"list.0"` is absent even when `list` holds items.
    pub fn lookup(&self, path: &str, separator: &str) -> Slot<&Value> {
        let mut keys = path.split(separator);
        let Some(first) = keys.next() else {
            return Slot::Absent;
        };
        let mut current = match self.0.get(first) {
            Some(value) => value,
            None => return Slot::Absent,
        };
        for key in keys {
            current = match current.as_record().and_then(|r| r.0.get(key)) {
                Some(value) => value,
                None => return Slot::Absent,
            };
        }
        Slot::Present(current)
    }

    /// Parse a JSON document whose top level is an object.
    pub fn from_json_str(text: &str) -> Result<Self, TypeError> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| TypeError::Serialization(e.to_string()))?;
        Self::try_from(json)
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = TypeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(json) {
            Value::Record(record) => Ok(record),
            other => Err(TypeError::NotARecord(other.kind_name())),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
