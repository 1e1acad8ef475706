//! In-memory spreadsheet generation for the sample download.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use tracing::debug;

use bact_model::{CellValue, WideTable};

use crate::error::{OutputError, Result};

pub const SAMPLE_FILE_NAME: &str = "sample_bacteria.xlsx";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A generated file ready to hand to a download trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDownload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SampleDownload {
    /// Serializes `table` into workbook bytes under the fixed sample name.
    pub fn from_table(table: &WideTable) -> Result<Self> {
        Ok(Self {
            file_name: SAMPLE_FILE_NAME.to_string(),
            mime: XLSX_MIME.to_string(),
            bytes: workbook_bytes(table)?,
        })
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        debug!(path = %path.display(), bytes = self.bytes.len(), "wrote sample workbook");
        Ok(())
    }
}

/// Writes `table` as a single worksheet: a bold header row, then data rows.
/// No index column is written.
pub fn workbook_bytes(table: &WideTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let sheet = workbook.add_worksheet();
    for (col, name) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(0, column_index(col)?, name, &header)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_index(row_idx + 1)?;
        for (col, cell) in row.iter().enumerate() {
            let col_num = column_index(col)?;
            match cell {
                CellValue::Number(value) => {
                    sheet.write_number(row_num, col_num, *value)?;
                }
                CellValue::Text(text) => {
                    sheet.write_string(row_num, col_num, text)?;
                }
                CellValue::Missing => {}
            }
        }
    }
    let bytes = workbook.save_to_buffer()?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        bytes = bytes.len(),
        "serialized workbook"
    );
    Ok(bytes)
}

fn row_index(idx: usize) -> Result<u32> {
    u32::try_from(idx).map_err(|_| OutputError::TooLarge(format!("row {idx}")))
}

fn column_index(idx: usize) -> Result<u16> {
    u16::try_from(idx).map_err(|_| OutputError::TooLarge(format!("column {idx}")))
}
