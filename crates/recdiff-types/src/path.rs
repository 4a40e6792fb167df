//! Key paths: separator-joined key sequences addressing a leaf value.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The default key path separator.
pub const SEPARATOR: &str = ".";

/// A traversal from a record's root to a leaf value, written as the keys
/// along the way joined by a separator (`"prop2.prop3.prop6"`).
///
/// Keys containing the separator make a path ambiguous. That is a caller
/// precondition and is not checked here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    /// A single-key path.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Prepend `key` and a separator to this path.
    pub fn prefixed(self, key: &str, separator: &str) -> Self {
        let mut joined = String::with_capacity(key.len() + separator.len() + self.0.len());
        joined.push_str(key);
        joined.push_str(separator);
        joined.push_str(&self.0);
        Self(joined)
    }

    /// Split the path into its keys.
    pub fn segments<'a>(&'a self, separator: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0.split(separator)
    }

    /// Number of keys in the path.
    pub fn depth(&self, separator: &str) -> usize {
        self.segments(separator).count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPath({})", self.0)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for KeyPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for KeyPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for KeyPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
