//! Optional comparison chart generation.
//!
//! Chart rendering is a compile-time capability behind the `charts` feature.
//! Callers query `charts_available` once and branch; a build without the
//! feature still runs the full textual analysis.

#[cfg(feature = "charts")]
pub mod generator;

#[cfg(feature = "charts")]
pub use generator::{generate_comparison_chart, ChartConfig};

/// Whether this build can render charts
pub fn charts_available() -> bool {
    cfg!(feature = "charts")
}
