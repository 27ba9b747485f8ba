//! Error types for the routing crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while exporting a report.
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing the export file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
