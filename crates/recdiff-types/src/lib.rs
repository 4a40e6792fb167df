//! Value model for recdiff.
//!
//! Nested key-value records are represented with an explicit tagged variant
//! so traversal code dispatches on a tag rather than inspecting runtime
//! shapes. Every other recdiff crate depends on `recdiff-types`.
//!
//! # Key Types
//!
//! - [`Value`] -- Tagged value: [`Scalar`], [`Record`], or opaque [`Composite`]
//! - [`Record`] -- Insertion-ordered mapping from string keys to values
//! - [`KeyPath`] -- Separator-joined traversal from a record root to a leaf
//! - [`Slot`] -- Lookup result that keeps "absent" apart from a stored `null`

pub mod error;
pub mod path;
pub mod record;
pub mod slot;
pub mod value;

pub use error::TypeError;
pub use path::{KeyPath, SEPARATOR};
pub use record::Record;
pub use slot::Slot;
pub use value::{Composite, Scalar, Value};
