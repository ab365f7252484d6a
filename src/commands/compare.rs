//! Compare command implementation.
//!
//! The compare command:
//! 1. Parses the arbitrary election log
//! 2. Parses the anonymous election log
//! 3. Prints the comparison report
//! 4. Writes the chart and the optional JSON report

use crate::analyzer::ComparisonAnalyzer;
use crate::chart;
use crate::output::write_report;
use crate::parser::{AnalysisReport, RunMetrics, TraceParser};
use crate::utils::config::DEFAULT_CHART_FILE;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Path to the arbitrary election trace log
    pub arbitrary_log: PathBuf,

    /// Path to the anonymous election trace log
    pub anonymous_log: PathBuf,

    /// Output path for the comparison chart
    pub chart_output: PathBuf,

    /// Skip chart generation entirely
    pub skip_chart: bool,

    /// Output path for a JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            arbitrary_log: PathBuf::new(),
            anonymous_log: PathBuf::new(),
            chart_output: PathBuf::from(DEFAULT_CHART_FILE),
            skip_chart: false,
            output_json: None,
        }
    }
}

/// Validate compare arguments
///
/// **Public** - called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.arbitrary_log.as_os_str().is_empty() {
        anyhow::bail!("Arbitrary election log path cannot be empty");
    }

    if args.anonymous_log.as_os_str().is_empty() {
        anyhow::bail!("Anonymous election log path cannot be empty");
    }

    if !args.skip_chart && args.chart_output.as_os_str().is_empty() {
        anyhow::bail!("Chart output path cannot be empty");
    }

    Ok(())
}

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * A missing or unreadable log file is fatal and names the offending path
/// * JSON report write failures are fatal when a report was requested
///
/// Chart generation failures are downgraded to warnings and never affect
/// the exit status or the textual report.
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    let start_time = Instant::now();

    info!(
        "Comparing election runs: {} vs {}",
        args.arbitrary_log.display(),
        args.anonymous_log.display()
    );

    let parser = TraceParser::new();

    info!("Step 1/4: Parsing arbitrary election log...");
    let arbitrary = parser.parse_file(&args.arbitrary_log).with_context(|| {
        format!(
            "Failed to read arbitrary election log: {}",
            args.arbitrary_log.display()
        )
    })?;

    info!("Step 2/4: Parsing anonymous election log...");
    let anonymous = parser.parse_file(&args.anonymous_log).with_context(|| {
        format!(
            "Failed to read anonymous election log: {}",
            args.anonymous_log.display()
        )
    })?;

    info!("Step 3/4: Rendering comparison report...");
    let analyzer = ComparisonAnalyzer::new(arbitrary, anonymous);
    println!("{}", analyzer.render_summary());

    info!("Step 4/4: Writing output files...");

    if args.skip_chart {
        info!("Chart generation skipped (not requested)");
    } else if !chart::charts_available() {
        warn!(
            "Chart rendering unavailable in this build; skipping {}",
            args.chart_output.display()
        );
    } else if let Some(path) =
        render_chart(analyzer.arbitrary(), analyzer.anonymous(), &args.chart_output)
    {
        println!("✓ Chart written to: {}", path.display());
    }

    if let Some(json_path) = &args.output_json {
        let report = AnalysisReport::new(
            analyzer.arbitrary().clone(),
            analyzer.anonymous().clone(),
        );
        write_report(&report, json_path)
            .with_context(|| format!("Failed to write JSON report: {}", json_path.display()))?;

        println!("✓ Report written to: {}", json_path.display());
    }

    info!(
        "Comparison completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Best-effort chart rendering; any failure is a warning, never an error
///
/// **Private** - internal helper for execute_compare
#[cfg(feature = "charts")]
fn render_chart(
    arbitrary: &RunMetrics,
    anonymous: &RunMetrics,
    output_path: &Path,
) -> Option<PathBuf> {
    use crate::output::write_chart;

    let svg = match chart::generate_comparison_chart(arbitrary, anonymous, None) {
        Ok(svg) => svg,
        Err(e) => {
            warn!("Chart generation failed: {}", e);
            return None;
        }
    };

    match write_chart(&svg, output_path) {
        Ok(()) => Some(output_path.to_path_buf()),
        Err(e) => {
            warn!("Failed to write chart {}: {}", output_path.display(), e);
            None
        }
    }
}

#[cfg(not(feature = "charts"))]
fn render_chart(
    _arbitrary: &RunMetrics,
    _anonymous: &RunMetrics,
    _output_path: &Path,
) -> Option<PathBuf> {
    None
}
