//! Error types for the case registry
//!
//! Only input that names a case can fail to parse. Reverse lookup reports
//! absence with `Option` and is not represented here.

use thiserror::Error;

/// Errors produced by casereg-core
#[derive(Debug, Error)]
pub enum Error {
    /// The identifier does not name any case
    #[error("unknown case: {0}")]
    UnknownCase(String),

    /// Writing action output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for casereg-core operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from an unrecognized case identifier
    pub fn is_unknown_case(&self) -> bool {
        matches!(self, Error::UnknownCase(_))
    }
}
