//! Trace parsing and data model.
//!
//! This module handles:
//! - Classifying single log lines against known signal shapes
//! - Scanning a whole log into per-run metrics
//! - Defining the run metrics schema

pub mod line;
pub mod schema;
pub mod trace;

// Re-export main types
pub use line::{FieldSignal, LinePatterns};
pub use schema::{Algorithm, AnalysisReport, NodeRecord, RunMetrics};
pub use trace::TraceParser;
