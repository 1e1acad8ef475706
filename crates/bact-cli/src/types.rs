use std::path::PathBuf;

use bact_model::{StaticTable, TidyTable, WideTable};

/// Parameters of the `chart` command.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tidy_csv: Option<PathBuf>,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend_title: Option<String>,
}

impl ChartRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            tidy_csv: None,
            title: None,
            x_label: None,
            y_label: None,
            legend_title: None,
        }
    }
}

#[derive(Debug)]
pub struct ChartOutcome {
    pub table: WideTable,
    pub tidy: TidyTable,
    /// `None` when the upload had no data rows and the chart was skipped.
    pub chart: Option<PathBuf>,
    pub tidy_csv: Option<PathBuf>,
}

/// Parameters of the `sample` command. An empty category list means the
/// default bacteria.
#[derive(Debug, Clone)]
pub struct SampleRequest {
    pub output: PathBuf,
    pub days: u32,
    pub seed: Option<u64>,
    pub categories: Vec<String>,
}

#[derive(Debug)]
pub struct SampleOutcome {
    pub table: WideTable,
    pub output: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceRequest {
    pub chart_output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ReferenceOutcome {
    pub effect: StaticTable,
    pub mixture: StaticTable,
    pub chart: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub upload: Option<PathBuf>,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub struct PageOutcome {
    pub output: PathBuf,
    /// Sample workbook written next to the page, linked from it.
    pub sample: PathBuf,
    /// Message shown in place of the uploaded data section.
    pub upload_error: Option<String>,
}
