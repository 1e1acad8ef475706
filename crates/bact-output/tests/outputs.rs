//! Tests for workbook and CSV outputs.

use bact_ingest::{read_workbook_bytes};
use bact_model::{CellValue, TidyRow, TidyTable, WideTable};
use bact_output::{SAMPLE_FILE_NAME, SampleDownload, XLSX_MIME, write_tidy_csv, write_wide_csv};

fn sample_table() -> WideTable {
    WideTable::new(
        vec!["Bacteria type".into(), "Day 1".into(), "Day 2".into()],
        vec![
            vec!["Lactobacilli".into(), 4.0.into(), 3.0.into()],
            vec!["Lactococci".into(), 2.0.into(), 2.0.into()],
        ],
    )
}

#[test]
fn sample_download_has_fixed_name_and_mime() {
    let download = SampleDownload::from_table(&sample_table()).expect("build download");
    assert_eq!(download.file_name, SAMPLE_FILE_NAME);
    assert_eq!(download.mime, XLSX_MIME);
    // xlsx files are zip containers.
    assert_eq!(&download.bytes[..2], b"PK");
}

#[test]
fn sample_workbook_reads_back_identically() {
    let table = sample_table();
    let download = SampleDownload::from_table(&table).expect("build download");
    let decoded =
        read_workbook_bytes(&download.bytes).expect("decode workbook");
    assert_eq!(decoded, table);
}

#[test]
fn download_writes_to_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(SAMPLE_FILE_NAME);
    let download = SampleDownload::from_table(&sample_table()).expect("build download");
    download.write_to(&path).expect("write download");
    assert_eq!(std::fs::read(&path).expect("read back"), download.bytes);
}

#[test]
fn tidy_csv_has_header_and_rows() {
    let tidy = TidyTable {
        identity_column: "Bacteria type".to_string(),
        bucket_column: "Day".to_string(),
        value_column: "Count".to_string(),
        rows: vec![
            TidyRow::new("Lactobacilli", "Day 1", 4.0),
            TidyRow::new("Lactobacilli", "Day 2", 3.0),
        ],
    };
    let mut buffer = Vec::new();
    write_tidy_csv(&tidy, &mut buffer).expect("write csv");
    let text = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Bacteria type,Day,Count");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Lactobacilli,Day 1,4"));
}

#[test]
fn wide_csv_leaves_missing_cells_empty() {
    let table = WideTable::new(
        vec!["Cat".into(), "Day 1".into()],
        vec![
            vec!["A".into(), CellValue::Missing],
            vec!["B".into(), 2.0.into()],
        ],
    );
    let mut buffer = Vec::new();
    write_wide_csv(&table, &mut buffer).expect("write csv");
    let text = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Cat,Day 1");
    assert_eq!(lines[1], "A,");
}
