//! Writers for the sample download and table exports.

pub mod csv;
pub mod error;
pub mod workbook;

pub use csv::{tidy_to_dataframe, wide_to_dataframe, write_tidy_csv, write_wide_csv};
pub use error::{OutputError, Result};
pub use workbook::{SAMPLE_FILE_NAME, SampleDownload, XLSX_MIME, workbook_bytes};
