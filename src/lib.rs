//! Election Trace Analyzer
//!
//! Comparative performance analysis of ring-network leader election
//! simulation logs.
//!
//! This crate provides the core implementation for the
//! `election-trace` CLI tool: a permissive log-parsing state machine
//! that recovers per-run metrics from free-text simulation traces, a
//! comparison report renderer, and an optional SVG chart generator.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install election-trace-analyzer
//! election-trace arbitrary.out anonymous.out
//! ```

pub mod analyzer;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
