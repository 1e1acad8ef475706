//! CLI library components for the bacteria dynamics dashboard.

pub mod commands;
pub mod display;
pub mod logging;
pub mod reference;
pub mod types;
