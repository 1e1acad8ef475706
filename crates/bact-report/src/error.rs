use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Charts are only drawn for tables with at least one observation.
    #[error("nothing to chart: the table has no data rows")]
    Empty,
    #[error("chart drawing failed: {0}")]
    Drawing(String),
}
