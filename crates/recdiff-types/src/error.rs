use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("expected a record, got {0}")]
    NotARecord(&'static str),

    #[error("serialization error: {0}")]
    Serialization(String),
}
