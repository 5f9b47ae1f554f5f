//! Error types for StaffDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StaffError
pub type Result<T> = std::result::Result<T, StaffError>;

/// Unified error type for StaffDB operations
#[derive(Debug, Error)]
pub enum StaffError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Record {id} not found at {}", path.display())]
    RecordNotFound { id: i64, path: PathBuf },

    #[error("No employee found: {0}")]
    NoMatch(String),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StaffError {
    /// True for every flavour of "nothing there": missing file, missing
    /// directory, or a scan without a match.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StaffError::RecordNotFound { .. }
                | StaffError::NoMatch(_)
                | StaffError::DirectoryNotFound(_)
        )
    }
}

impl From<prost::DecodeError> for StaffError {
    fn from(err: prost::DecodeError) -> Self {
        StaffError::Decode(err.to_string())
    }
}
