//! The tagged value type stored in records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::record::Record;

/// A value held under a record key.
///
/// Only [`Value::Record`] is traversed by path enumeration and diffing.
/// Scalars and composites are leaves, compared as a whole with deep
/// equality (`PartialEq`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Scalar(Scalar),
    Record(Record),
    Composite(Composite),
}

/// Atomic values.
#[derive(Clone, Debug)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// Non-record composite values. These are opaque leaves: never recursed
/// into when generating paths.
#[derive(Clone, Debug, PartialEq)]
pub enum Composite {
    Sequence(Vec<Value>),
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    /// The nested record, if this value is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Short name of the value's shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Scalar(Scalar::Null) => "null",
            Value::Scalar(Scalar::Bool(_)) => "bool",
            Value::Scalar(Scalar::Number(_)) => "number",
            Value::Scalar(Scalar::String(_)) => "string",
            Value::Record(_) => "record",
            Value::Composite(Composite::Sequence(_)) => "sequence",
            Value::Composite(Composite::Timestamp(_)) => "timestamp",
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Number(a), Scalar::Number(b)) => numbers_equal(a, b),
            (Scalar::String(a), Scalar::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Numbers compare by numeric value, so `1` and `1.0` are equal.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    a.as_f64() == b.as_f64()
}

// ---------------------------------------------------------------
// JSON conversions
// ---------------------------------------------------------------

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => Value::Scalar(Scalar::Number(n)),
            serde_json::Value::String(s) => Value::Scalar(Scalar::String(s)),
            serde_json::Value::Array(items) => Value::Composite(Composite::Sequence(
                items.into_iter().map(Value::from).collect(),
            )),
            serde_json::Value::Object(map) => Value::Record(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

/// Timestamps render as RFC 3339 strings; reading that JSON back yields a
/// string scalar.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Scalar(Scalar::Null) => serde_json::Value::Null,
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(b),
            Value::Scalar(Scalar::Number(n)) => serde_json::Value::Number(n),
            Value::Scalar(Scalar::String(s)) => serde_json::Value::String(s),
            Value::Record(record) => serde_json::Value::Object(
                record
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Composite(Composite::Sequence(items)) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Composite(Composite::Timestamp(ts)) => {
                serde_json::Value::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_owned()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Composite(Composite::Sequence(items))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Composite(Composite::Timestamp(ts))
    }
}
