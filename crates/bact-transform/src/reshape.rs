//! Wide-to-tidy reshaping.
//!
//! Column 0 of the wide table names the category; every other column is a
//! time bucket. Each (row, bucket) cell becomes one [`TidyRow`], emitted in
//! row order and then column order.

use tracing::debug;

use bact_model::{FormatError, Result, TidyRow, TidyTable, WideTable};

/// Column names of the reshaped table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshapeLabels {
    pub bucket_column: String,
    pub value_column: String,
}

impl Default for ReshapeLabels {
    fn default() -> Self {
        Self {
            bucket_column: "Day".to_string(),
            value_column: "Count".to_string(),
        }
    }
}

/// Reshape with the default `Day` / `Count` column names.
pub fn reshape(table: &WideTable) -> Result<TidyTable> {
    reshape_with(table, &ReshapeLabels::default())
}

/// Pivot every value column of `table` into its own row per source row.
///
/// # Errors
///
/// - [`FormatError::InsufficientColumns`] when the table has fewer than 2 columns.
/// - [`FormatError::RaggedRow`] when a row's width differs from the header.
/// - [`FormatError::InvalidValue`] for the first missing or non-numeric value cell.
pub fn reshape_with(table: &WideTable, labels: &ReshapeLabels) -> Result<TidyTable> {
    let width = table.column_count();
    if width < 2 {
        return Err(FormatError::InsufficientColumns { found: width });
    }
    let buckets = table.value_columns();
    let mut rows = Vec::with_capacity(table.row_count() * buckets.len());
    for (row_idx, cells) in table.rows.iter().enumerate() {
        if cells.len() != width {
            return Err(FormatError::RaggedRow {
                row: row_idx,
                expected: width,
                found: cells.len(),
            });
        }
        let category = cells[0].display_text();
        for (bucket, cell) in buckets.iter().zip(&cells[1..]) {
            let value = cell.as_number().ok_or_else(|| FormatError::InvalidValue {
                row: row_idx,
                column: bucket.clone(),
                value: cell.describe(),
            })?;
            rows.push(TidyRow::new(category.clone(), bucket.clone(), value));
        }
    }
    debug!(
        source_rows = table.row_count(),
        buckets = buckets.len(),
        tidy_rows = rows.len(),
        "reshaped wide table"
    );
    Ok(TidyTable {
        identity_column: table.columns[0].clone(),
        bucket_column: labels.bucket_column.clone(),
        value_column: labels.value_column.clone(),
        rows,
    })
}
