//! Error types for the diff crate.

use recdiff_types::TypeError;

/// Errors that can occur while configuring a differ or converting its
/// inputs. Diffing two typed records never fails.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The differ configuration was malformed or rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An input could not be converted into a record.
    #[error("type error: {0}")]
    Type(#[from] TypeError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
