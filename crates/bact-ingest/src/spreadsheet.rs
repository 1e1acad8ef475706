use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use bact_model::{CellValue, FormatError, WideTable};

use crate::error::{IngestError, Result};

/// Spreadsheet container formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    /// Office Open XML workbook (`.xlsx`, `.xlsm`).
    Xlsx,
    /// Legacy BIFF workbook (`.xls`).
    Xls,
}

impl SpreadsheetFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xlsx" | "xlsm" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Reads the first worksheet of a workbook file.
///
/// The extension gates which files are accepted; the container itself is
/// detected from the content, so a legacy workbook saved as `.xlsx` still loads.
pub fn read_workbook_path(path: &Path) -> Result<WideTable> {
    let format = SpreadsheetFormat::from_path(path).ok_or_else(|| {
        IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    })?;
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), ?format, "read workbook file");
    Ok(read_workbook_bytes(&bytes)?)
}

/// Decodes workbook bytes into a wide table, detecting the container format.
///
/// The first row of the first worksheet is the header. Fully empty trailing
/// rows are dropped.
pub fn read_workbook_bytes(bytes: &[u8]) -> bact_model::Result<WideTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(parse_failure)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(err)) => return Err(parse_failure(err)),
        None => return Err(FormatError::parse_failure("workbook contains no worksheets")),
    };
    range_to_table(&range)
}

fn parse_failure(err: impl Display) -> FormatError {
    FormatError::parse_failure(err.to_string())
}

fn range_to_table(range: &Range<Data>) -> bact_model::Result<WideTable> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(FormatError::parse_failure("the first worksheet is empty"));
    };
    let columns = build_headers(header);
    let mut data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(decode_cell).collect())
        .collect();
    while data
        .last()
        .is_some_and(|row| row.iter().all(CellValue::is_missing))
    {
        data.pop();
    }
    debug!(
        columns = columns.len(),
        rows = data.len(),
        "decoded worksheet"
    );
    Ok(WideTable::new(columns, data))
}

fn build_headers(header: &[Data]) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = normalize_header(&decode_cell(cell).display_text());
            let name = if name.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name
            };
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                name
            } else {
                format!("{name}.{}", *count - 1)
            }
        })
        .collect()
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::String(text) => {
            let trimmed = text.trim().trim_matches('\u{feff}');
            if trimmed.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("counts.XLSX")),
            Some(SpreadsheetFormat::Xlsx)
        );
        assert_eq!(
            SpreadsheetFormat::from_path(Path::new("old.xls")),
            Some(SpreadsheetFormat::Xls)
        );
        assert_eq!(SpreadsheetFormat::from_path(Path::new("counts.csv")), None);
        assert_eq!(SpreadsheetFormat::from_path(Path::new("counts")), None);
    }

    #[test]
    fn fills_blank_and_duplicate_headers() {
        let header = vec![
            Data::String("Type".into()),
            Data::Empty,
            Data::String(" Day  1 ".into()),
            Data::String("Day 1".into()),
        ];
        assert_eq!(
            build_headers(&header),
            ["Type", "Unnamed: 1", "Day 1", "Day 1.1"]
        );
    }

    #[test]
    fn decodes_cells() {
        assert_eq!(decode_cell(&Data::Int(4)), CellValue::Number(4.0));
        assert_eq!(decode_cell(&Data::Float(2.5)), CellValue::Number(2.5));
        assert_eq!(decode_cell(&Data::String("  ".into())), CellValue::Missing);
        assert_eq!(decode_cell(&Data::Bool(true)), CellValue::text("true"));
    }

    #[test]
    fn garbage_bytes_are_a_parse_failure() {
        let err = read_workbook_bytes(b"not a workbook").unwrap_err();
        assert!(matches!(err, FormatError::ParseFailure { .. }));
    }
}
