//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use bact_model::FormatError;
use thiserror::Error;

/// Errors that can occur while loading an uploaded spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension is not one of the accepted spreadsheet suffixes.
    #[error("unsupported file type {path}: expected .xlsx or .xls")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents could not be turned into a table.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl IngestError {
    /// The underlying format problem, when the file was readable.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
