//! Loading uploaded spreadsheets into [`bact_model::WideTable`].

pub mod error;
pub mod spreadsheet;

pub use error::{IngestError, Result};
pub use spreadsheet::{SpreadsheetFormat, read_workbook_bytes, read_workbook_path};
