//! Integration tests for workbook decoding.

use std::fs;

use rust_xlsxwriter::Workbook;

use bact_ingest::{IngestError, read_workbook_bytes, read_workbook_path};
use bact_model::{CellValue, FormatError};

fn counts_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Bacteria type").unwrap();
    sheet.write_string(0, 1, "Day 1").unwrap();
    sheet.write_string(0, 2, "Day 2").unwrap();
    sheet.write_string(1, 0, "Lactobacilli").unwrap();
    sheet.write_number(1, 1, 4.0).unwrap();
    sheet.write_number(1, 2, 3.0).unwrap();
    sheet.write_string(2, 0, "Streptococci").unwrap();
    sheet.write_number(2, 1, 3.0).unwrap();
    sheet.write_string(2, 2, "lots").unwrap();
    workbook.save_to_buffer().unwrap()
}

#[test]
fn decodes_header_and_rows() {
    let bytes = counts_workbook();
    let table = read_workbook_bytes(&bytes).expect("decode workbook");
    assert_eq!(table.columns, ["Bacteria type", "Day 1", "Day 2"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0][0], CellValue::text("Lactobacilli"));
    assert_eq!(table.rows[0][1], CellValue::Number(4.0));
    assert_eq!(table.rows[1][2], CellValue::text("lots"));
}

#[test]
fn reads_from_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("counts.xlsx");
    fs::write(&path, counts_workbook()).expect("write workbook");
    let table = read_workbook_path(&path).expect("read workbook");
    assert_eq!(table.category(1).as_deref(), Some("Streptococci"));
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("counts.csv");
    fs::write(&path, "a,b\n1,2\n").expect("write csv");
    let err = read_workbook_path(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_workbook_path(&dir.path().join("absent.xlsx")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}

#[test]
fn corrupt_workbook_is_a_parse_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, b"PK\x03\x04 truncated").expect("write file");
    let err = read_workbook_path(&path).unwrap_err();
    assert!(matches!(
        err.format_error(),
        Some(FormatError::ParseFailure { .. })
    ));
}

#[test]
fn single_column_sheet_still_decodes() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Bacteria type").unwrap();
    sheet.write_string(1, 0, "Lactococci").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();
    let table = read_workbook_bytes(&bytes).expect("decode workbook");
    assert_eq!(table.column_count(), 1);
}

#[test]
fn container_is_detected_from_content() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("renamed.xls");
    fs::write(&path, counts_workbook()).expect("write workbook");
    let table = read_workbook_path(&path).expect("read workbook");
    assert_eq!(table.columns, ["Bacteria type", "Day 1", "Day 2"]);
    assert_eq!(table.row_count(), 2);
}
