//! Synthetic wide tables for the "download a sample file" button.
//!
//! Each category gets a baseline in `[1, 10)` and a trend in `{-1, 0, 1}`,
//! drawn once. Each day adds noise in `[-1, 2)`. Values never drop below 1.

use tracing::debug;

use bact_model::{CellValue, SampleError, SampleSpec, WideTable};

use crate::random::RandomSource;

pub const BASE_RANGE: (i64, i64) = (1, 10);
pub const TRENDS: [i64; 3] = [-1, 0, 1];
pub const NOISE_RANGE: (i64, i64) = (-1, 2);
pub const MIN_COUNT: i64 = 1;

/// Per-category shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTrend {
    pub base: i64,
    pub trend: i64,
}

impl CategoryTrend {
    pub fn draw(rng: &mut impl RandomSource) -> Self {
        let base = rng.int_in(BASE_RANGE.0, BASE_RANGE.1);
        let trend = rng.choose(&TRENDS);
        Self { base, trend }
    }

    /// Count on 1-based `day` with the given noise, floored at [`MIN_COUNT`].
    pub fn value_on(self, day: u32, noise: i64) -> i64 {
        let offset = self.trend * (i64::from(day) - 1);
        (self.base + offset + noise).max(MIN_COUNT)
    }
}

/// Builds a sample table with one row per category and one column per day.
///
/// Draw order is fixed per category (base, trend, then one noise draw per
/// day), so a seeded source always reproduces the same table.
pub fn generate(spec: &SampleSpec, rng: &mut impl RandomSource) -> WideTable {
    let mut columns = Vec::with_capacity(spec.day_count() as usize + 1);
    columns.push(spec.identity_label().to_string());
    columns.extend(spec.bucket_names());

    let mut table = WideTable::empty(columns);
    for category in spec.categories() {
        let shape = CategoryTrend::draw(rng);
        debug!(
            category = %category,
            base = shape.base,
            trend = shape.trend,
            "drew category trend"
        );
        let mut row = Vec::with_capacity(spec.day_count() as usize + 1);
        row.push(CellValue::Text(category.clone()));
        for day in 1..=spec.day_count() {
            let noise = rng.int_in(NOISE_RANGE.0, NOISE_RANGE.1);
            row.push(CellValue::from(shape.value_on(day, noise)));
        }
        table.push_row(row);
    }
    table
}

/// Validates the request and generates in one step.
///
/// # Errors
///
/// Returns [`SampleError::InvalidArgument`] for an empty category list or a
/// zero day count.
pub fn generate_for(
    categories: &[String],
    day_count: u32,
    rng: &mut impl RandomSource,
) -> Result<WideTable, SampleError> {
    let spec = SampleSpec::new(categories.to_vec(), day_count)?;
    Ok(generate(&spec, rng))
}
