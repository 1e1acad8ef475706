//! Grouped bar layout derived from a tidy table.

use std::collections::BTreeMap;

use bact_model::TidyTable;

/// Bars of one category across all buckets.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BarSeries {
    pub category: String,
    /// One slot per bucket, `None` when the category has no observation there.
    pub values: Vec<Option<f64>>,
}

/// Buckets on the x-axis, one colored series per category.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GroupedBars {
    pub buckets: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Axis and legend titles taken from the tidy column names.
    pub bucket_label: String,
    pub value_label: String,
    pub group_label: String,
}

impl GroupedBars {
    /// Groups observations by bucket and category, both in first-seen order.
    ///
    /// Repeated (category, bucket) observations are summed into one bar.
    pub fn from_tidy(tidy: &TidyTable) -> Self {
        let mut buckets: Vec<String> = Vec::new();
        let mut bucket_index: BTreeMap<&str, usize> = BTreeMap::new();
        let mut categories: Vec<String> = Vec::new();
        let mut category_index: BTreeMap<&str, usize> = BTreeMap::new();
        for row in tidy {
            if !bucket_index.contains_key(row.bucket.as_str()) {
                bucket_index.insert(&row.bucket, buckets.len());
                buckets.push(row.bucket.clone());
            }
            if !category_index.contains_key(row.category.as_str()) {
                category_index.insert(&row.category, categories.len());
                categories.push(row.category.clone());
            }
        }

        let mut series: Vec<BarSeries> = categories
            .into_iter()
            .map(|category| BarSeries {
                category,
                values: vec![None; buckets.len()],
            })
            .collect();
        for row in tidy {
            let s = category_index[row.category.as_str()];
            let b = bucket_index[row.bucket.as_str()];
            let slot = &mut series[s].values[b];
            *slot = Some(slot.unwrap_or(0.0) + row.value);
        }

        Self {
            buckets,
            series,
            bucket_label: tidy.bucket_column.clone(),
            value_label: tidy.value_column.clone(),
            group_label: tidy.identity_column.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty() || self.series.is_empty()
    }

    /// Largest bar height, or `0.0` when there are no bars.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().flatten())
            .copied()
            .fold(0.0, f64::max)
    }

    /// Smallest bar height, or `0.0` when there are no bars.
    pub fn min_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().flatten())
            .copied()
            .fold(0.0, f64::min)
    }

    pub fn value(&self, category: &str, bucket: &str) -> Option<f64> {
        let b = self.buckets.iter().position(|name| name == bucket)?;
        self.series
            .iter()
            .find(|series| series.category == category)
            .and_then(|series| series.values[b])
    }
}
