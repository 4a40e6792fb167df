//! Path enumeration: list every leaf key path of a record.

use recdiff_types::{KeyPath, Record, Value, SEPARATOR};

/// Every leaf key path of `record`, in key order.
///
/// Nested records expand in place, depth-first, before later sibling keys
/// are visited. Only leaves are emitted; a nested record contributes its
/// leaves but never its own path, so an empty nested record contributes
/// nothing.
pub fn enumerate_paths(record: &Record) -> Vec<KeyPath> {
    enumerate_under(record, "", SEPARATOR)
}

/// Leaf paths of `record`, each prefixed with `prefix` verbatim.
pub(crate) fn enumerate_under(record: &Record, prefix: &str, separator: &str) -> Vec<KeyPath> {
    let mut paths = Vec::new();
    for (key, value) in record {
        match value {
            Value::Record(child) => {
                let nested = format!("{prefix}{key}{separator}");
                paths.extend(enumerate_under(child, &nested, separator));
            }
            Value::Scalar(_) | Value::Composite(_) => {
                paths.push(KeyPath::new(format!("{prefix}{key}")));
            }
        }
    }
    paths
}
