//! Bidirectional diff: the union of both one-way diffs.

use indexmap::IndexSet;
use recdiff_types::{KeyPath, Record, SEPARATOR};

use crate::one_way::one_way_with;

/// Every leaf path that is missing from one side or differs between `a`
/// and `b`.
///
/// Paths from `a`'s one-way diff come first, then the paths only `b`'s
/// one-way diff found. Duplicates keep their first position.
pub fn diff_paths(a: &Record, b: &Record) -> Vec<KeyPath> {
    diff_paths_with(a, b, SEPARATOR)
}

pub(crate) fn diff_paths_with(a: &Record, b: &Record, separator: &str) -> Vec<KeyPath> {
    let forward = one_way_with(a, b, separator);
    let backward = one_way_with(b, a, separator);

    let mut union: IndexSet<KeyPath> = IndexSet::with_capacity(forward.len() + backward.len());
    union.extend(forward);
    union.extend(backward);
    union.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(json: serde_json::Value) -> Record {
        Record::try_from(json).unwrap()
    }

    #[test]
    fn changed_leaf_appears_once() {
        let a = record(json!({"k": 1}));
        let b = record(json!({"k": 2}));
        assert_eq!(diff_paths(&a, &b), vec!["k"]);
    }

    #[test]
    fn forward_paths_precede_backward_only_paths() {
        let a = record(json!({"only_a": 1, "shared": 1}));
        let b = record(json!({"only_b": 1, "shared": 2}));
        assert_eq!(diff_paths(&a, &b), vec!["only_a", "shared", "only_b"]);
        assert_eq!(diff_paths(&b, &a), vec!["only_b", "shared", "only_a"]);
    }

    #[test]
    fn record_replaced_by_scalar_reports_both_shapes() {
        let a = record(json!({"s": {"a": 1}}));
        let b = record(json!({"s": "flat"}));
        assert_eq!(diff_paths(&a, &b), vec!["s.a", "s"]);
    }

    #[test]
    fn empty_records_have_no_diff() {
        assert!(diff_paths(&Record::new(), &Record::new()).is_empty());
    }
}
