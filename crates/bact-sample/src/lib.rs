//! Sample data generation with an injectable random source.

pub mod generator;
pub mod random;

pub use generator::{CategoryTrend, generate, generate_for};
pub use random::{RandomSource, RngSource};
