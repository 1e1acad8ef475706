//! Reshaping uploaded count tables and preparing them for charting.

pub mod grouped;
pub mod reshape;

pub use grouped::{BarSeries, GroupedBars};
pub use reshape::{ReshapeLabels, reshape, reshape_with};
