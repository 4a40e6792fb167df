//! A differ bound to a validated configuration.

use recdiff_types::{KeyPath, Record};

use crate::bidirectional::diff_paths_with;
use crate::config::DiffConfig;
use crate::error::DiffResult;
use crate::one_way::one_way_with;
use crate::paths::enumerate_under;
use crate::report::{build_report, DiffReport};

/// Runs path enumeration and diffing with a configured separator.
///
/// The free functions ([`diff`](crate::diff) and friends) behave like
/// `Differ::default()`.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    /// Create a differ, rejecting an invalid configuration.
    pub fn new(config: DiffConfig) -> DiffResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    pub fn enumerate_paths(&self, record: &Record) -> Vec<KeyPath> {
        enumerate_under(record, "", self.separator())
    }

    /// Leaf paths of `record`, each starting with `prefix` verbatim. Pass a
    /// prefix ending in the separator to place the record under a parent
    /// path.
    pub fn enumerate_paths_under(&self, record: &Record, prefix: &str) -> Vec<KeyPath> {
        enumerate_under(record, prefix, self.separator())
    }

    pub fn one_way_diff(&self, x: &Record, y: &Record) -> Vec<KeyPath> {
        one_way_with(x, y, self.separator())
    }

    pub fn diff_paths(&self, a: &Record, b: &Record) -> Vec<KeyPath> {
        diff_paths_with(a, b, self.separator())
    }

    pub fn diff(&self, reference: &Record, target: &Record) -> DiffReport {
        build_report(reference, target, self.separator())
    }

    /// Diff two JSON documents. Both must be objects at the top level.
    pub fn diff_json(
        &self,
        reference: &serde_json::Value,
        target: &serde_json::Value,
    ) -> DiffResult<DiffReport> {
        let reference = Record::try_from(reference.clone())?;
        let target = Record::try_from(target.clone())?;
        Ok(self.diff(&reference, &target))
    }
}
