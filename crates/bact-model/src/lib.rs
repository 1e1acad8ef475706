//! Value types shared by the bacteria dynamics crates.
//!
//! Tables are plain data: they are built once by ingest or the sample
//! generator and then only read by the reshaper and the renderers.

pub mod cell;
pub mod error;
pub mod sample;
pub mod table;

pub use cell::{CellValue, format_number};
pub use error::{FormatError, Result, SampleError};
pub use sample::{DEFAULT_BACTERIA, DEFAULT_DAY_COUNT, DEFAULT_IDENTITY_LABEL, SampleSpec};
pub use table::{StaticTable, TidyRow, TidyTable, WideTable};
