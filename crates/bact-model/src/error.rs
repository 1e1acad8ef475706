use thiserror::Error;

/// Reasons an uploaded table cannot be reshaped or charted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The table needs a category column plus at least one value column.
    #[error(
        "the file must contain at least 2 columns (bacteria names and daily counts), found {found}"
    )]
    InsufficientColumns { found: usize },

    /// A value cell is missing or not numeric.
    #[error("row {row}, column '{column}': expected a number, found {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    /// A data row does not match the header width.
    #[error("row {row} has {found} cells but the header has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The spreadsheet could not be decoded at all.
    #[error("could not read spreadsheet: {reason}")]
    ParseFailure { reason: String },
}

impl FormatError {
    pub fn parse_failure(reason: impl Into<String>) -> Self {
        Self::ParseFailure {
            reason: reason.into(),
        }
    }
}

/// Rejected sample generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
