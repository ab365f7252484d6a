//! Output writers for analysis data.
//!
//! This module handles writing data to disk:
//! - JSON analysis reports
//! - SVG comparison charts

pub mod chart;
pub mod json;

// Re-export main functions
pub use chart::write_chart;
pub use json::{read_report, write_report};
