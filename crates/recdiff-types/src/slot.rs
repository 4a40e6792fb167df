//! Absent-aware lookup results.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The outcome of resolving a key path in a record.
///
/// `Absent` means the path does not resolve: a key along the way is
/// missing, or an intermediate value is not a record. A key that is present
/// and holds `null` resolves to `Present` with a null scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slot<T> {
    Present(T),
    Absent,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Absent
    }
}

impl<T> Slot<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }

    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Present(v) => Slot::Present(v),
            Slot::Absent => Slot::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Slot::Present(v) => Some(v),
            Slot::Absent => None,
        }
    }
}

impl<T: Clone> Slot<&T> {
    pub fn cloned(self) -> Slot<T> {
        match self {
            Slot::Present(v) => Slot::Present(v.clone()),
            Slot::Absent => Slot::Absent,
        }
    }
}

impl<T> From<Option<T>> for Slot<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Slot::Present(v),
            None => Slot::Absent,
        }
    }
}

/// A present slot serializes as its value. Containers are expected to skip
/// absent slots (`skip_serializing_if = "Slot::is_absent"`); a bare absent
/// slot serializes as unit.
impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Present(v) => v.serialize(serializer),
            Slot::Absent => serializer.serialize_unit(),
        }
    }
}

/// Any deserialized value is present. Pair with `#[serde(default)]` so a
/// missing field reads back as `Absent`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Slot::Present)
    }
}
