//! Diff reports: differing values side by side, plus the reference
//! record's matching values.

use indexmap::IndexMap;
use recdiff_types::{KeyPath, Record, Slot, Value, SEPARATOR};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bidirectional::diff_paths_with;
use crate::paths::enumerate_under;

/// The values found under one differing key path.
///
/// A side whose record does not resolve the path is [`Slot::Absent`] and is
/// omitted when serialized, so `{"targ": null}` (reference absent, target
/// holds `null`) stays distinct from `{"ref": null, "targ": null}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    #[serde(rename = "ref", default, skip_serializing_if = "Slot::is_absent")]
    pub reference: Slot<Value>,
    #[serde(rename = "targ", default, skip_serializing_if = "Slot::is_absent")]
    pub target: Slot<Value>,
}

/// How a differing path changed going from reference to target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    /// Only the target resolves the path.
    Added,
    /// Only the reference resolves the path.
    Removed,
    /// Both resolve the path to different values.
    Modified,
}

impl DiffEntry {
    /// Classify the entry. `None` when neither side resolves the path,
    /// which only happens if a key contains the separator.
    pub fn kind(&self) -> Option<ChangeKind> {
        match (&self.reference, &self.target) {
            (Slot::Absent, Slot::Present(_)) => Some(ChangeKind::Added),
            (Slot::Present(_), Slot::Absent) => Some(ChangeKind::Removed),
            (Slot::Present(_), Slot::Present(_)) => Some(ChangeKind::Modified),
            (Slot::Absent, Slot::Absent) => None,
        }
    }
}

/// The result of comparing a reference record with a target record.
///
/// `diff` and `matched` never share a key. Every leaf path of the
/// reference lands in exactly one of them; paths that exist only in the
/// target appear in `diff` alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Differing or one-sided paths, in [`diff_paths`](crate::diff_paths) order.
    pub diff: IndexMap<KeyPath, DiffEntry>,
    /// Reference paths whose value the target matches, in reference order.
    #[serde(rename = "match")]
    pub matched: IndexMap<KeyPath, Value>,
}

impl DiffReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no path differs.
    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    /// Number of differing paths.
    pub fn len(&self) -> usize {
        self.diff.len()
    }

    pub fn entry(&self, path: &str) -> Option<&DiffEntry> {
        self.diff.get(path)
    }

    pub fn matched(&self, path: &str) -> Option<&Value> {
        self.matched.get(path)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matched.contains_key(path)
    }

    /// Number of paths only the target has.
    pub fn additions(&self) -> usize {
        self.count(ChangeKind::Added)
    }

    /// Number of paths only the reference has.
    pub fn removals(&self) -> usize {
        self.count(ChangeKind::Removed)
    }

    /// Number of paths both sides have with different values.
    pub fn modifications(&self) -> usize {
        self.count(ChangeKind::Modified)
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.diff
            .values()
            .filter(|entry| entry.kind() == Some(kind))
            .count()
    }
}

/// Compare `reference` with `target` and collect differing and matching
/// values.
pub fn diff(reference: &Record, target: &Record) -> DiffReport {
    build_report(reference, target, SEPARATOR)
}

pub(crate) fn build_report(reference: &Record, target: &Record, separator: &str) -> DiffReport {
    let mut report = DiffReport::new();

    for path in diff_paths_with(reference, target, separator) {
        let entry = DiffEntry {
            reference: reference.lookup(path.as_str(), separator).cloned(),
            target: target.lookup(path.as_str(), separator).cloned(),
        };
        report.diff.insert(path, entry);
    }

    for path in enumerate_under(reference, "", separator) {
        if report.diff.contains_key(&path) {
            continue;
        }
        if let Slot::Present(value) = reference.lookup(path.as_str(), separator) {
            report.matched.insert(path, value.clone());
        }
    }

    debug!(
        diff = report.diff.len(),
        matched = report.matched.len(),
        "built diff report"
    );
    report
}
