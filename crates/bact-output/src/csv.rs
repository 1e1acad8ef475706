//! CSV export of wide and tidy tables through Polars.

use std::io::Write;

use polars::prelude::{Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, SerWriter, Series};

use bact_model::{CellValue, TidyTable, WideTable};

use crate::error::Result;

/// Tidy table as a three-column frame (identity, bucket, value).
pub fn tidy_to_dataframe(tidy: &TidyTable) -> Result<DataFrame> {
    let categories: Vec<String> = tidy.iter().map(|row| row.category.clone()).collect();
    let buckets: Vec<String> = tidy.iter().map(|row| row.bucket.clone()).collect();
    let values: Vec<f64> = tidy.iter().map(|row| row.value).collect();
    let columns = vec![
        Series::new(tidy.identity_column.as_str().into(), categories).into_column(),
        Series::new(tidy.bucket_column.as_str().into(), buckets).into_column(),
        Series::new(tidy.value_column.as_str().into(), values).into_column(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Wide table as a frame; columns whose cells are all numeric become `f64`.
pub fn wide_to_dataframe(table: &WideTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.column_count());
    for (idx, name) in table.columns.iter().enumerate() {
        let cells: Vec<&CellValue> = table.rows.iter().filter_map(|row| row.get(idx)).collect();
        let numeric = idx > 0
            && cells
                .iter()
                .all(|cell| cell.is_missing() || cell.as_number().is_some());
        let series = if numeric {
            let values: Vec<Option<f64>> = cells.iter().map(|cell| cell.as_number()).collect();
            Series::new(name.as_str().into(), values)
        } else {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|cell| (!cell.is_missing()).then(|| cell.display_text()))
                .collect();
            Series::new(name.as_str().into(), values)
        };
        columns.push(series.into_column());
    }
    Ok(DataFrame::new(columns)?)
}

pub fn write_tidy_csv<W: Write>(tidy: &TidyTable, writer: W) -> Result<()> {
    let mut frame = tidy_to_dataframe(tidy)?;
    write_frame(&mut frame, writer)
}

pub fn write_wide_csv<W: Write>(table: &WideTable, writer: W) -> Result<()> {
    let mut frame = wide_to_dataframe(table)?;
    write_frame(&mut frame, writer)
}

fn write_frame<W: Write>(frame: &mut DataFrame, mut writer: W) -> Result<()> {
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(frame)?;
    writer.flush()?;
    Ok(())
}
