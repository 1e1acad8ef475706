//! Grouped bar chart rendering.
//!
//! Buckets sit on the x-axis, each category is one colored bar inside every
//! bucket group. Output is an SVG document held in memory.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use bact_transform::GroupedBars;

use crate::error::ChartError;
use crate::palette::Palette;

/// Share of each bucket slot covered by its bar group.
const GROUP_WIDTH: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    /// Axis and legend titles; `None` falls back to the table's column names.
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend_title: Option<String>,
    pub size: (u32, u32),
    pub palette: Palette,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Bacteria dynamics by day".to_string(),
            x_label: None,
            y_label: None,
            legend_title: None,
            size: (960, 540),
            palette: Palette::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_legend_title(mut self, title: impl Into<String>) -> Self {
        self.legend_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Renders `bars` as an SVG document.
///
/// # Errors
///
/// [`ChartError::Empty`] when there is nothing to draw; callers are expected
/// to skip the chart for empty tables instead.
pub fn render_grouped_bar_svg(bars: &GroupedBars, options: &ChartOptions) -> Result<String, ChartError> {
    if bars.is_empty() {
        return Err(ChartError::Empty);
    }
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, options.size).into_drawing_area();
        draw_grouped_bars(&root, bars, options).map_err(|err| ChartError::Drawing(err.to_string()))?;
        root.present()
            .map_err(|err| ChartError::Drawing(err.to_string()))?;
    }
    debug!(
        buckets = bars.buckets.len(),
        series = bars.series.len(),
        bytes = svg.len(),
        "rendered grouped bar chart"
    );
    Ok(svg)
}

fn draw_grouped_bars<DB>(
    root: &DrawingArea<DB, Shift>,
    bars: &GroupedBars,
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let bucket_count = bars.buckets.len() as f64;
    let y_max = bars.max_value().max(1.0) * 1.1;
    let y_min = bars.min_value() * 1.1;
    let x_label = options.x_label.as_deref().unwrap_or(&bars.bucket_label);
    let y_label = options.y_label.as_deref().unwrap_or(&bars.value_label);
    let legend_title = options
        .legend_title
        .as_deref()
        .unwrap_or(&bars.group_label);

    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..bucket_count, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .x_desc(x_label)
        .y_desc(y_label)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    // Legend heading as a text-only entry above the category entries.
    chart
        .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
        .label(legend_title);

    let series_count = bars.series.len() as f64;
    let bar_width = GROUP_WIDTH / series_count;
    let group_start = (1.0 - GROUP_WIDTH) / 2.0;
    for (idx, series) in bars.series.iter().enumerate() {
        let color = options.palette.color(idx);
        let offset = group_start + idx as f64 * bar_width;
        let rects = series
            .values
            .iter()
            .enumerate()
            .filter_map(|(bucket, value)| value.map(|v| (bucket as f64, v)))
            .map(move |(bucket, v)| {
                let x0 = bucket + offset;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, v)], color.filled())
            });
        chart
            .draw_series(rects)?
            .label(series.category.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    let label_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (idx, bucket) in bars.buckets.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(idx as f64 + 0.5, y_min));
        root.draw(&Text::new(bucket.as_str(), (px, py + 6), label_style.clone()))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font(("sans-serif", 14))
        .draw()?;

    Ok(())
}
