#![deny(unsafe_code)]

use crate::CellValue;

/// One row per category, one column per time bucket.
///
/// Column 0 is the identity column holding the category label; the remaining
/// columns hold counts. Construction does not validate shape, so malformed
/// uploads can be represented and rejected by the reshaper with a precise
/// error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WideTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl WideTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn identity_column(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }

    pub fn value_columns(&self) -> &[String] {
        self.columns.get(1..).unwrap_or_default()
    }

    /// Category label of the given row, if the row exists.
    pub fn category(&self, row: usize) -> Option<String> {
        self.rows
            .get(row)
            .and_then(|cells| cells.first())
            .map(CellValue::display_text)
    }

    /// Looks up a cell by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.columns.iter().position(|name| name == column)?;
        self.rows.get(row).and_then(|cells| cells.get(idx))
    }
}

/// One (category, bucket, value) observation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TidyRow {
    pub category: String,
    pub bucket: String,
    pub value: f64,
}

impl TidyRow {
    pub fn new(category: impl Into<String>, bucket: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            bucket: bucket.into(),
            value,
        }
    }
}

/// Long form of a [`WideTable`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TidyTable {
    /// Name of the source identity column (used as the legend title).
    pub identity_column: String,
    pub bucket_column: String,
    pub value_column: String,
    pub rows: Vec<TidyRow>,
}

impl TidyTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TidyRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a TidyTable {
    type Item = &'a TidyRow;
    type IntoIter = std::slice::Iter<'a, TidyRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Fixed, caller-supplied data shown verbatim.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaticTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl StaticTable {
    pub fn new(
        title: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
        }
    }

    /// Wide view of the same data, for reshaping and charting.
    pub fn to_wide(&self) -> WideTable {
        WideTable::new(self.columns.clone(), self.rows.clone())
    }
}
