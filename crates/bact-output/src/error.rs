use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("spreadsheet write failed: {0}")]
    Spreadsheet(String),
    #[error("csv write failed: {0}")]
    Csv(String),
    #[error("table is too large for a worksheet: {0}")]
    TooLarge(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rust_xlsxwriter::XlsxError> for OutputError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Csv(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
