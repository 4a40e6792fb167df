//! One-way diff: leaf paths of one record that the other does not match.

use recdiff_types::{KeyPath, Record, Value, SEPARATOR};
use tracing::trace;

/// Leaf paths present in `x` whose value is missing from `y` or differs
/// from it.
///
/// Paths that exist only in `y` are not reported; run the diff in both
/// directions ([`diff_paths`](crate::diff_paths)) to see them.
pub fn one_way_diff(x: &Record, y: &Record) -> Vec<KeyPath> {
    one_way_with(x, y, SEPARATOR)
}

pub(crate) fn one_way_with(x: &Record, y: &Record, separator: &str) -> Vec<KeyPath> {
    trace!(keys = x.len(), "one-way diff");
    descend(x, Some(y), separator)
}

/// Compare `x` against the matching subtree of the other side. `y` is
/// `None` when the other side has no record at this position, in which
/// case every leaf below `x` mismatches.
///
/// Each level returns paths relative to itself; the caller prefixes them
/// with the key it descended through.
fn descend(x: &Record, y: Option<&Record>, separator: &str) -> Vec<KeyPath> {
    let mut result = Vec::new();
    for (key, value) in x {
        let other = y.and_then(|y| y.get(key));
        match value {
            Value::Record(child) => {
                let nested = descend(child, other.and_then(Value::as_record), separator);
                result.extend(
                    nested
                        .into_iter()
                        .map(|path| path.prefixed(key, separator)),
                );
            }
            leaf => {
                if other != Some(leaf) {
                    result.push(KeyPath::new(key.as_str()));
                }
            }
        }
    }
    result
}
