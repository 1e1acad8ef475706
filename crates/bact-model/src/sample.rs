use crate::SampleError;

/// Categories used by the dashboard's sample file.
pub const DEFAULT_BACTERIA: [&str; 5] = [
    "Lactobacilli",
    "Streptococci",
    "Lactococci",
    "Propionibacteria",
    "Bifidobacteria",
];

pub const DEFAULT_DAY_COUNT: u32 = 5;

pub const DEFAULT_IDENTITY_LABEL: &str = "Bacteria type";

/// A validated sample generation request.
///
/// Deserialization goes through [`SampleSpec::new`], so a decoded spec is
/// held to the same checks as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawSampleSpec")]
pub struct SampleSpec {
    identity_label: String,
    categories: Vec<String>,
    day_count: u32,
}

#[derive(serde::Deserialize)]
struct RawSampleSpec {
    #[serde(default = "default_identity_label")]
    identity_label: String,
    categories: Vec<String>,
    day_count: u32,
}

fn default_identity_label() -> String {
    DEFAULT_IDENTITY_LABEL.to_string()
}

impl TryFrom<RawSampleSpec> for SampleSpec {
    type Error = SampleError;

    fn try_from(raw: RawSampleSpec) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.categories, raw.day_count)?.with_identity_label(raw.identity_label))
    }
}

impl SampleSpec {
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidArgument`] when `categories` is empty or
    /// `day_count` is zero.
    pub fn new(categories: Vec<String>, day_count: u32) -> Result<Self, SampleError> {
        if categories.is_empty() {
            return Err(SampleError::InvalidArgument(
                "at least one category is required".to_string(),
            ));
        }
        if day_count < 1 {
            return Err(SampleError::InvalidArgument(format!(
                "day count must be at least 1, got {day_count}"
            )));
        }
        Ok(Self {
            identity_label: DEFAULT_IDENTITY_LABEL.to_string(),
            categories,
            day_count,
        })
    }

    pub fn bacteria_default() -> Self {
        Self {
            identity_label: DEFAULT_IDENTITY_LABEL.to_string(),
            categories: DEFAULT_BACTERIA.iter().map(ToString::to_string).collect(),
            day_count: DEFAULT_DAY_COUNT,
        }
    }

    #[must_use]
    pub fn with_identity_label(mut self, label: impl Into<String>) -> Self {
        self.identity_label = label.into();
        self
    }

    pub fn identity_label(&self) -> &str {
        &self.identity_label
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Bucket names in column order: `Day 1` .. `Day N`.
    pub fn bucket_names(&self) -> Vec<String> {
        (1..=self.day_count).map(|day| format!("Day {day}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_days() {
        let err = SampleSpec::new(vec!["X".into()], 0).unwrap_err();
        assert!(matches!(err, SampleError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_empty_categories() {
        let err = SampleSpec::new(Vec::new(), 3).unwrap_err();
        assert!(matches!(err, SampleError::InvalidArgument(_)));
    }

    #[test]
    fn bucket_names_are_one_based() {
        let spec = SampleSpec::new(vec!["X".into()], 3).unwrap();
        assert_eq!(spec.bucket_names(), ["Day 1", "Day 2", "Day 3"]);
    }
}
