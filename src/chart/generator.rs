//! SVG comparison chart generation.
//!
//! Hand-built SVG: two summary bar panels (total messages, total rounds)
//! and one per-node grouped bar panel, with a shared legend. Series colors
//! match the original analysis tooling.

use crate::parser::RunMetrics;
use crate::utils::error::ChartError;
use log::info;

const ARBITRARY_COLOR: &str = "#3498db";
const ANONYMOUS_COLOR: &str = "#e74c3c";

const PANEL_HEIGHT: usize = 240;
const PANEL_GAP: usize = 30;
const TITLE_SPACE: usize = 40;
const LEGEND_SPACE: usize = 50;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Ring Network Election Algorithms - Comparison".to_string(),
            width: 1200,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// One bar within a panel
struct Bar {
    label: String,
    value: u64,
    color: &'static str,
}

/// Generate the comparison chart as an SVG string.
///
/// **Public** - called by the compare command when chart output is wanted
///
/// # Errors
/// * `ChartError::EmptyData` - neither run retained a node, nothing to plot
pub fn generate_comparison_chart(
    arbitrary: &RunMetrics,
    anonymous: &RunMetrics,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if arbitrary.node_records.is_empty() && anonymous.node_records.is_empty() {
        return Err(ChartError::EmptyData);
    }

    let config = config.cloned().unwrap_or_default();
    let width = config.width;
    let total_height = TITLE_SPACE + 2 * PANEL_HEIGHT + PANEL_GAP + LEGEND_SPACE;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, total_height, width, total_height
    ));
    svg.push_str(r#"<style>text { font: 12px sans-serif; }</style>"#);
    svg.push_str(&format!(
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2,
        config.title
    ));

    // Top row: one summary panel per aggregate metric
    let panel_width = (width - 3 * PANEL_GAP) / 2;
    render_bar_panel(
        &mut svg,
        PANEL_GAP,
        TITLE_SPACE,
        panel_width,
        PANEL_HEIGHT,
        "Total Messages",
        &[
            summary_bar("Arbitrary", arbitrary.total_messages, ARBITRARY_COLOR),
            summary_bar("Anonymous", anonymous.total_messages, ANONYMOUS_COLOR),
        ],
    );
    render_bar_panel(
        &mut svg,
        2 * PANEL_GAP + panel_width,
        TITLE_SPACE,
        panel_width,
        PANEL_HEIGHT,
        "Rounds Completed",
        &[
            summary_bar("Arbitrary", u64::from(arbitrary.total_rounds), ARBITRARY_COLOR),
            summary_bar("Anonymous", u64::from(anonymous.total_rounds), ANONYMOUS_COLOR),
        ],
    );

    // Bottom row: per-node message counts, both series side by side
    let node_bars = per_node_bars(arbitrary, anonymous);
    render_bar_panel(
        &mut svg,
        PANEL_GAP,
        TITLE_SPACE + PANEL_HEIGHT + PANEL_GAP,
        width - 2 * PANEL_GAP,
        PANEL_HEIGHT,
        "Messages Sent per Node",
        &node_bars,
    );

    render_legend(&mut svg, total_height - LEGEND_SPACE + 20);

    svg.push_str("</svg>");

    info!("Comparison chart generated ({} bytes)", svg.len());
    Ok(svg)
}

fn summary_bar(label: &str, value: u64, color: &'static str) -> Bar {
    Bar {
        label: label.to_string(),
        value,
        color,
    }
}

/// Interleave both runs' per-node message counts over the union of node ids
fn per_node_bars(arbitrary: &RunMetrics, anonymous: &RunMetrics) -> Vec<Bar> {
    let node_count = arbitrary
        .node_records
        .len()
        .max(anonymous.node_records.len());

    let mut bars = Vec::with_capacity(node_count * 2);
    for id in 0..node_count as u32 {
        bars.push(Bar {
            label: format!("N{}", id),
            value: arbitrary
                .node_record(id)
                .map(|n| n.messages_sent)
                .unwrap_or(0),
            color: ARBITRARY_COLOR,
        });
        bars.push(Bar {
            label: String::new(),
            value: anonymous
                .node_record(id)
                .map(|n| n.messages_sent)
                .unwrap_or(0),
            color: ANONYMOUS_COLOR,
        });
    }
    bars
}

/// Render one titled panel of vertical bars scaled to the panel's maximum
fn render_bar_panel(
    out: &mut String,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    title: &str,
    bars: &[Bar],
) {
    let label_space = 40;
    let plot_height = height - label_space;
    let baseline = y + plot_height;

    out.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-weight="bold">{}</text>"#,
        x + width / 2,
        y + 14,
        title
    ));
    out.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
        x,
        baseline,
        x + width,
        baseline,
        "#999999"
    ));

    if bars.is_empty() {
        return;
    }

    let max_value = bars.iter().map(|b| b.value).max().unwrap_or(0).max(1);
    let slot = width as f64 / bars.len() as f64;
    let bar_width = (slot * 0.6).max(1.0);

    for (i, bar) in bars.iter().enumerate() {
        let bar_height = (bar.value as f64 / max_value as f64) * (plot_height - 30) as f64;
        let bar_x = x as f64 + i as f64 * slot + (slot - bar_width) / 2.0;
        let bar_y = baseline as f64 - bar_height;

        out.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            bar_x, bar_y, bar_width, bar_height, bar.color
        ));
        out.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            bar_x + bar_width / 2.0,
            bar_y - 4.0,
            bar.value
        ));
        if !bar.label.is_empty() {
            out.push_str(&format!(
                r#"<text x="{:.1}" y="{}" text-anchor="middle">{}</text>"#,
                bar_x + bar_width / 2.0,
                baseline + 16,
                bar.label
            ));
        }
    }
}

fn render_legend(out: &mut String, y: usize) {
    let items = [
        ("Arbitrary Election", ARBITRARY_COLOR),
        ("Anonymous Election", ANONYMOUS_COLOR),
    ];

    for (i, (label, color)) in items.iter().enumerate() {
        let x = 40 + i * 180;
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="15" height="15" fill="{}" rx="2"/>"#,
            x,
            y - 12,
            color
        ));
        out.push_str(&format!(
            r#"<text x="{}" y="{}">{}</text>"#,
            x + 20,
            y,
            label
        ));
    }
}
