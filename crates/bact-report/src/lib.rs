//! Rendering for the bacteria dynamics dashboard: grouped bar charts and the
//! static HTML page.

pub mod chart;
pub mod error;
pub mod page;
pub mod palette;

pub use chart::{ChartOptions, render_grouped_bar_svg};
pub use error::ChartError;
pub use page::{DashboardPage, PageBlock, TableBlock};
pub use palette::Palette;
