use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use bact_ingest::{IngestError, read_workbook_path};
use bact_model::{DEFAULT_BACTERIA, SampleSpec, TidyTable, WideTable};
use bact_output::{SAMPLE_FILE_NAME, SampleDownload, write_tidy_csv};
use bact_report::{ChartOptions, DashboardPage, Palette, TableBlock, render_grouped_bar_svg};
use bact_sample::{RngSource, generate};
use bact_transform::{GroupedBars, reshape};

use crate::reference::{self, antimicrobial_effect_table, mixture_table};
use crate::types::{
    ChartOutcome, ChartRequest, PageOutcome, PageRequest, ReferenceOutcome, ReferenceRequest,
    SampleOutcome, SampleRequest,
};

/// An uploaded workbook together with its reshaped form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub table: WideTable,
    pub tidy: TidyTable,
}

/// Reads and reshapes an uploaded workbook.
///
/// # Errors
///
/// Any read or format problem; the chart must not be drawn in that case.
pub fn process_upload(path: &Path) -> std::result::Result<Upload, IngestError> {
    let table = read_workbook_path(path)?;
    let tidy = reshape(&table)?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        observations = tidy.len(),
        "processed upload"
    );
    Ok(Upload { table, tidy })
}

pub fn run_chart(request: &ChartRequest) -> Result<ChartOutcome> {
    let span = info_span!("chart", input = %request.input.display());
    let _guard = span.enter();

    let upload = process_upload(&request.input)
        .with_context(|| format!("read {}", request.input.display()))?;

    let tidy_csv = match &request.tidy_csv {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_tidy_csv(&upload.tidy, BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), rows = upload.tidy.len(), "wrote tidy csv");
            Some(path.clone())
        }
        None => None,
    };

    let mut options = ChartOptions::default().with_title(
        request
            .title
            .clone()
            .unwrap_or_else(|| reference::UPLOAD_CHART_TITLE.to_string()),
    );
    options.x_label.clone_from(&request.x_label);
    options.y_label.clone_from(&request.y_label);
    options.legend_title = Some(
        request
            .legend_title
            .clone()
            .unwrap_or_else(|| reference::LEGEND_TITLE.to_string()),
    );

    let chart = match chart_svg(&upload.tidy, &options)? {
        Some(svg) => {
            fs::write(&request.output, svg)
                .with_context(|| format!("write {}", request.output.display()))?;
            info!(path = %request.output.display(), "wrote chart");
            Some(request.output.clone())
        }
        None => None,
    };

    Ok(ChartOutcome {
        table: upload.table,
        tidy: upload.tidy,
        chart,
        tidy_csv,
    })
}

pub fn run_sample(request: &SampleRequest) -> Result<SampleOutcome> {
    let span = info_span!("sample", days = request.days, seed = ?request.seed);
    let _guard = span.enter();

    let categories = if request.categories.is_empty() {
        DEFAULT_BACTERIA.iter().map(ToString::to_string).collect()
    } else {
        request.categories.clone()
    };
    let spec = SampleSpec::new(categories, request.days).context("invalid sample request")?;
    let table = generate_sample(&spec, request.seed);
    let download = SampleDownload::from_table(&table).context("build sample workbook")?;
    download
        .write_to(&request.output)
        .with_context(|| format!("write {}", request.output.display()))?;
    info!(path = %request.output.display(), bytes = download.bytes.len(), "wrote sample file");

    Ok(SampleOutcome {
        table,
        output: request.output.clone(),
        file_name: download.file_name,
        mime: download.mime,
        bytes: download.bytes.len(),
    })
}

pub fn run_reference(request: &ReferenceRequest) -> Result<ReferenceOutcome> {
    let span = info_span!("reference");
    let _guard = span.enter();

    let mixture = mixture_table();
    let chart = match &request.chart_output {
        Some(path) => {
            let svg = mixture_chart_svg()?;
            fs::write(path, svg).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote mixture chart");
            Some(path.clone())
        }
        None => None,
    };

    Ok(ReferenceOutcome {
        effect: antimicrobial_effect_table(),
        mixture,
        chart,
    })
}

/// Builds the full dashboard page. A bad upload becomes an error block on
/// the page; only I/O on the outputs fails the command.
pub fn run_page(request: &PageRequest) -> Result<PageOutcome> {
    let span = info_span!("page", output = %request.output.display());
    let _guard = span.enter();

    let mut page = DashboardPage::new(reference::PAGE_TITLE);
    page.lead(reference::INTRO)
        .paragraph(reference::UPLOAD_PROMPT);

    let mut upload_error = None;
    if let Some(path) = &request.upload {
        match process_upload(path) {
            Ok(upload) => {
                page.heading(reference::UPLOAD_HEADING)
                    .table(TableBlock::from_wide(&upload.table));
                let options = ChartOptions::default()
                    .with_title(reference::UPLOAD_CHART_TITLE)
                    .with_legend_title(reference::LEGEND_TITLE);
                if let Some(svg) = chart_svg(&upload.tidy, &options)? {
                    page.chart(svg);
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "upload rejected");
                let message = error.to_string();
                page.error(message.clone());
                upload_error = Some(message);
            }
        }
    }

    page.divider()
        .heading(reference::EFFECT_HEADING)
        .lead(reference::EFFECT_LEAD)
        .table(TableBlock::from_static(&antimicrobial_effect_table()))
        .paragraph(reference::EFFECT_CONCLUSION)
        .divider()
        .heading(reference::MIXTURE_HEADING)
        .lead(reference::MIXTURE_LEAD)
        .table(TableBlock::from_static(&mixture_table()))
        .chart(mixture_chart_svg()?);

    let sample_table = generate_sample(&SampleSpec::bacteria_default(), request.seed);
    let sample = sample_path_for(&request.output);
    SampleDownload::from_table(&sample_table)
        .context("build sample workbook")?
        .write_to(&sample)
        .with_context(|| format!("write {}", sample.display()))?;
    page.divider()
        .heading(reference::SAMPLE_HEADING)
        .table(TableBlock::from_wide(&sample_table))
        .download(reference::SAMPLE_LINK_LABEL, SAMPLE_FILE_NAME);

    fs::write(&request.output, page.to_html())
        .with_context(|| format!("write {}", request.output.display()))?;
    info!(
        path = %request.output.display(),
        blocks = page.blocks.len(),
        "wrote dashboard page"
    );

    Ok(PageOutcome {
        output: request.output.clone(),
        sample,
        upload_error,
    })
}

/// Renders the tidy table, or `None` when there is nothing to draw.
fn chart_svg(tidy: &TidyTable, options: &ChartOptions) -> Result<Option<String>> {
    if tidy.is_empty() {
        warn!("no data rows, chart skipped");
        return Ok(None);
    }
    let bars = GroupedBars::from_tidy(tidy);
    let svg = render_grouped_bar_svg(&bars, options).context("render chart")?;
    Ok(Some(svg))
}

fn mixture_chart_svg() -> Result<String> {
    let tidy = reshape(&mixture_table().to_wide()).context("reshape mixture table")?;
    let options = ChartOptions::default()
        .with_title(reference::MIXTURE_CHART_TITLE)
        .with_legend_title(reference::LEGEND_TITLE)
        .with_palette(Palette::Pastel);
    let bars = GroupedBars::from_tidy(&tidy);
    render_grouped_bar_svg(&bars, &options).context("render mixture chart")
}

fn generate_sample(spec: &SampleSpec, seed: Option<u64>) -> WideTable {
    match seed {
        Some(seed) => generate(spec, &mut RngSource::seeded(seed)),
        None => generate(spec, &mut RngSource::from_entropy()),
    }
}

fn sample_path_for(page: &Path) -> PathBuf {
    match page.parent() {
        Some(dir) => dir.join(SAMPLE_FILE_NAME),
        None => PathBuf::from(SAMPLE_FILE_NAME),
    }
}
