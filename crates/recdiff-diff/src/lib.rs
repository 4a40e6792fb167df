//! Key path diff engine for nested records.
//!
//! Compares two [`Record`]s leaf by leaf and reports the key paths whose
//! values differ or are missing on one side, alongside the paths of the
//! reference record that match.
//!
//! # Key Types
//!
//! - [`enumerate_paths`] -- Every leaf key path of a record, depth-first
//! - [`one_way_diff`] -- Leaf paths of `x` that are missing from or differ in `y`
//! - [`diff_paths`] -- Duplicate-free union of both one-way diffs
//! - [`diff`] / [`DiffReport`] / [`DiffEntry`] -- Differing and matching values
//! - [`Differ`] / [`DiffConfig`] -- The same operations with a configured separator
//!
//! [`Record`]: recdiff_types::Record

pub mod bidirectional;
pub mod config;
pub mod differ;
pub mod error;
pub mod one_way;
pub mod paths;
pub mod report;

pub use bidirectional::diff_paths;
pub use config::DiffConfig;
pub use differ::Differ;
pub use error::{DiffError, DiffResult};
pub use one_way::one_way_diff;
pub use paths::enumerate_paths;
pub use report::{diff, ChangeKind, DiffEntry, DiffReport};
