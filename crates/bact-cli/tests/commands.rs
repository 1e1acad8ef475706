//! Integration tests for the command layer.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

use bact_cli::commands::{process_upload, run_chart, run_page, run_reference, run_sample};
use bact_cli::types::{ChartRequest, PageRequest, ReferenceRequest, SampleRequest};
use bact_ingest::IngestError;
use bact_model::FormatError;

fn write_workbook(path: &Path, header: &[&str], rows: &[(&str, &[f64])]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (idx, (category, values)) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, *category).unwrap();
        for (col, value) in values.iter().enumerate() {
            sheet.write_number(row, col as u16 + 1, *value).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

fn counts_file(dir: &Path) -> PathBuf {
    let path = dir.join("counts.xlsx");
    write_workbook(
        &path,
        &["Bacteria type", "Day 1", "Day 2"],
        &[("Lactobacilli", &[4.0, 3.0]), ("Streptococci", &[3.0, 3.0])],
    );
    path
}

#[test]
fn chart_writes_svg_and_tidy_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = counts_file(dir.path());
    let mut request = ChartRequest::new(&input, dir.path().join("chart.svg"));
    request.tidy_csv = Some(dir.path().join("tidy.csv"));

    let outcome = run_chart(&request).expect("chart");
    assert_eq!(outcome.tidy.len(), 4);
    let svg = fs::read_to_string(outcome.chart.expect("chart path")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Lactobacilli"));
    let csv = fs::read_to_string(outcome.tidy_csv.expect("csv path")).unwrap();
    assert!(csv.starts_with("Bacteria type,Day,Count"));
}

#[test]
fn single_column_upload_is_rejected_without_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("names.xlsx");
    write_workbook(&input, &["Bacteria type"], &[("Lactobacilli", &[])]);

    let err = process_upload(&input).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Format(FormatError::InsufficientColumns { found: 1 })
    ));

    let output = dir.path().join("chart.svg");
    let err = run_chart(&ChartRequest::new(&input, &output)).unwrap_err();
    assert!(format!("{err:#}").contains("at least 2 columns"));
    assert!(!output.exists());
}

#[test]
fn header_only_upload_skips_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.xlsx");
    write_workbook(&input, &["Bacteria type", "Day 1"], &[]);

    let output = dir.path().join("chart.svg");
    let outcome = run_chart(&ChartRequest::new(&input, &output)).expect("chart");
    assert!(outcome.tidy.is_empty());
    assert!(outcome.chart.is_none());
    assert!(!output.exists());
}

#[test]
fn seeded_sample_files_match() {
    let dir = tempfile::tempdir().unwrap();
    let request = |name: &str| SampleRequest {
        output: dir.path().join(name),
        days: 3,
        seed: Some(11),
        categories: vec!["A".to_string(), "B".to_string()],
    };
    let first = run_sample(&request("first.xlsx")).expect("sample");
    let second = run_sample(&request("second.xlsx")).expect("sample");
    assert_eq!(first.table, second.table);
    assert_eq!(first.table.columns, ["Bacteria type", "Day 1", "Day 2", "Day 3"]);
    assert_eq!(first.file_name, "sample_bacteria.xlsx");
    assert!(first.output.exists());

    let reread = process_upload(&first.output).expect("sample reads back");
    assert_eq!(reread.table, first.table);
}

#[test]
fn sample_rejects_zero_days() {
    let dir = tempfile::tempdir().unwrap();
    let request = SampleRequest {
        output: dir.path().join("sample.xlsx"),
        days: 0,
        seed: None,
        categories: Vec::new(),
    };
    assert!(run_sample(&request).is_err());
}

#[test]
fn reference_renders_mixture_chart() {
    let dir = tempfile::tempdir().unwrap();
    let request = ReferenceRequest {
        chart_output: Some(dir.path().join("mixture.svg")),
    };
    let outcome = run_reference(&request).expect("reference");
    assert_eq!(outcome.mixture.rows.len(), 4);
    assert_eq!(outcome.effect.rows.len(), 5);
    let svg = fs::read_to_string(outcome.chart.expect("chart path")).unwrap();
    assert!(svg.contains("Propionibacteria"));
}

#[test]
fn page_embeds_upload_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("names.xlsx");
    write_workbook(&input, &["Bacteria type"], &[("Lactobacilli", &[])]);

    let request = PageRequest {
        upload: Some(input),
        output: dir.path().join("dashboard.html"),
        seed: Some(1),
    };
    let outcome = run_page(&request).expect("page");
    let message = outcome.upload_error.expect("upload error");
    assert!(message.contains("at least 2 columns"));

    let html = fs::read_to_string(&outcome.output).unwrap();
    assert!(html.contains("at least 2 columns"));
    assert!(html.contains("Bacteria spread area"));
    assert!(html.contains("sample_bacteria.xlsx"));
    assert_eq!(outcome.sample, dir.path().join("sample_bacteria.xlsx"));
    assert!(outcome.sample.exists());
}

#[test]
fn page_with_valid_upload_charts_upload_and_mixture() {
    let dir = tempfile::tempdir().unwrap();
    let request = PageRequest {
        upload: Some(counts_file(dir.path())),
        output: dir.path().join("dashboard.html"),
        seed: Some(2),
    };
    let outcome = run_page(&request).expect("page");
    assert!(outcome.upload_error.is_none());
    let html = fs::read_to_string(&outcome.output).unwrap();
    assert_eq!(html.matches("<svg").count(), 2);
    assert!(html.contains("Uploaded data"));
}

#[test]
fn upload_chart_legend_uses_fixed_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("strains.xlsx");
    write_workbook(&input, &["Strain", "Day 1"], &[("Lactococci", &[2.0])]);

    let outcome = run_chart(&ChartRequest::new(&input, dir.path().join("chart.svg")))
        .expect("chart");
    let svg = fs::read_to_string(outcome.chart.expect("chart path")).unwrap();
    assert!(svg.contains("Bacteria type"));
    assert!(!svg.contains("Strain"));

    let mut request = ChartRequest::new(&input, dir.path().join("custom.svg"));
    request.legend_title = Some("Culture".to_string());
    let outcome = run_chart(&request).expect("chart");
    let svg = fs::read_to_string(outcome.chart.expect("chart path")).unwrap();
    assert!(svg.contains("Culture"));
}
