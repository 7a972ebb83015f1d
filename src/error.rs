//! Error types for runtime bundle checks.
//!
//! Missing artifacts are not errors. They are reported through
//! [`crate::bundle::BundleReport`]; this module only covers faults that stop
//! the check from running at all.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundle check operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Main error type for all bundle check operations
#[derive(Error, Debug)]
pub enum CheckError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Repository root could not be determined
    #[error("Cannot resolve repository root from {}: {reason}", path.display())]
    RootResolution {
        /// Path the root was derived from
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
