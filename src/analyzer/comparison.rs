//! Textual comparison report over two parsed runs.
//!
//! Pure formatting: both `RunMetrics` values are complete before the
//! analyzer sees them, and rendering never fails. Chart generation is
//! delegated to the chart module by the compare command.

use crate::parser::RunMetrics;

const RULE_WIDTH: usize = 80;

/// Renders the comparative report for an arbitrary-election run and an
/// anonymous-election run.
pub struct ComparisonAnalyzer {
    arbitrary: RunMetrics,
    anonymous: RunMetrics,
}

impl ComparisonAnalyzer {
    pub fn new(arbitrary: RunMetrics, anonymous: RunMetrics) -> Self {
        Self {
            arbitrary,
            anonymous,
        }
    }

    pub fn arbitrary(&self) -> &RunMetrics {
        &self.arbitrary
    }

    pub fn anonymous(&self) -> &RunMetrics {
        &self.anonymous
    }

    /// Render the full comparison report.
    ///
    /// **Public** - the compare command prints this to stdout
    pub fn render_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=".repeat(RULE_WIDTH));
        lines.push("RING NETWORK ELECTION ALGORITHMS - COMPARATIVE ANALYSIS".to_string());
        lines.push("=".repeat(RULE_WIDTH));
        lines.push(String::new());

        self.render_general(&mut lines);
        self.render_metric_table(&mut lines);
        self.render_efficiency(&mut lines);
        self.render_node_table(&mut lines);
        self.render_characteristics(&mut lines);
        self.render_assessment(&mut lines);

        lines.push("=".repeat(RULE_WIDTH));
        lines.join("\n")
    }

    fn render_general(&self, lines: &mut Vec<String>) {
        lines.push("GENERAL".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!(
            "{} - elected leader: {}",
            self.arbitrary.algorithm,
            format_leader(self.arbitrary.leader_id)
        ));
        lines.push(format!(
            "{} - elected leader: {}",
            self.anonymous.algorithm,
            format_leader(self.anonymous.leader_id)
        ));
        lines.push(String::new());
    }

    fn render_metric_table(&self, lines: &mut Vec<String>) {
        lines.push("PERFORMANCE METRICS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!(
            "{:<28} | {:>12} | {:>12} | {}",
            "Metric", "Arbitrary", "Anonymous", "Delta"
        ));
        lines.push("-".repeat(RULE_WIDTH));

        let rows: [(&str, u64, u64); 3] = [
            (
                "Total messages",
                self.arbitrary.total_messages,
                self.anonymous.total_messages,
            ),
            (
                "Rounds completed",
                u64::from(self.arbitrary.total_rounds),
                u64::from(self.anonymous.total_rounds),
            ),
            (
                "Total events",
                self.arbitrary.total_events,
                self.anonymous.total_events,
            ),
        ];

        for (label, arb, anon) in rows {
            let (diff, pct) = delta(arb, anon);
            lines.push(format!(
                "{:<28} | {:>12} | {:>12} | {:+} ({:+.1}%)",
                label, arb, anon, diff, pct
            ));
        }
        lines.push(String::new());
    }

    fn render_efficiency(&self, lines: &mut Vec<String>) {
        let arb_rate = self.arbitrary.messages_per_round();
        let anon_rate = self.anonymous.messages_per_round();

        lines.push("MESSAGE EFFICIENCY".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!(
            "{} - messages per round: {:.2}",
            self.arbitrary.algorithm, arb_rate
        ));
        lines.push(format!(
            "{} - messages per round: {:.2}",
            self.anonymous.algorithm, anon_rate
        ));
        lines.push(format!(
            "Efficiency gap: {:.2} messages/round",
            (arb_rate - anon_rate).abs()
        ));
        lines.push(String::new());
    }

    /// Aligned per-node table over both runs.
    ///
    /// Rows cover node ids `0..max(len_a, len_b)`; a node absent from one
    /// run shows zero counters and an `N/A` state.
    fn render_node_table(&self, lines: &mut Vec<String>) {
        lines.push("PER-NODE BREAKDOWN".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(format!(
            "{:<9} | {:>8} | {:>8} | {:>10} | {:>11} | {:<11} | {:<11}",
            "Node", "Arb Msg", "Anon Msg", "Arb Rounds", "Anon Rounds", "Arb State", "Anon State"
        ));
        lines.push("-".repeat(RULE_WIDTH));

        let node_count = self
            .arbitrary
            .node_records
            .len()
            .max(self.anonymous.node_records.len());

        for id in 0..node_count as u32 {
            let arb = self.arbitrary.node_record(id);
            let anon = self.anonymous.node_record(id);

            let is_leader = arb.map(|n| n.is_leader).unwrap_or(false)
                || anon.map(|n| n.is_leader).unwrap_or(false);
            let marker = if is_leader { " *" } else { "" };

            lines.push(format!(
                "{:<9} | {:>8} | {:>8} | {:>10} | {:>11} | {:<11} | {:<11}",
                format!("Node {}{}", id, marker),
                arb.map(|n| n.messages_sent).unwrap_or(0),
                anon.map(|n| n.messages_sent).unwrap_or(0),
                arb.map(|n| n.rounds_completed).unwrap_or(0),
                anon.map(|n| n.rounds_completed).unwrap_or(0),
                state_label(arb),
                state_label(anon),
            ));
        }

        lines.push("(* elected leader in at least one run)".to_string());
        lines.push(String::new());
    }

    fn render_characteristics(&self, lines: &mut Vec<String>) {
        lines.push("ALGORITHM CHARACTERISTICS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        lines.push("Arbitrary Election: unique node ids circulate the ring and the".to_string());
        lines.push("  highest id wins; deterministic, every node runs every round.".to_string());
        lines.push("Anonymous Election: no ids, each round a random bit thins the".to_string());
        lines.push("  active set; probabilistic, the active count shrinks per round.".to_string());
        lines.push(String::new());
    }

    fn render_assessment(&self, lines: &mut Vec<String>) {
        lines.push("ASSESSMENT".to_string());
        lines.push("-".repeat(RULE_WIDTH));

        let arb_msgs = self.arbitrary.total_messages;
        let anon_msgs = self.anonymous.total_messages;
        if anon_msgs < arb_msgs {
            let saved = arb_msgs - anon_msgs;
            let pct = percentage_of(saved, arb_msgs);
            lines.push(format!(
                "{} used {} fewer messages ({:.1}% less)",
                self.anonymous.algorithm, saved, pct
            ));
        } else if anon_msgs > arb_msgs {
            let extra = anon_msgs - arb_msgs;
            let pct = percentage_of(extra, arb_msgs);
            lines.push(format!(
                "{} used {} fewer messages ({:.1}% less)",
                self.arbitrary.algorithm, extra, pct
            ));
        } else {
            lines.push(format!(
                "Both algorithms used the same number of messages ({})",
                arb_msgs
            ));
        }

        let arb_rounds = self.arbitrary.total_rounds;
        let anon_rounds = self.anonymous.total_rounds;
        if anon_rounds < arb_rounds {
            lines.push(format!(
                "{} finished in fewer rounds ({} vs {})",
                self.anonymous.algorithm, anon_rounds, arb_rounds
            ));
        } else if anon_rounds > arb_rounds {
            lines.push(format!(
                "{} finished in fewer rounds ({} vs {})",
                self.arbitrary.algorithm, arb_rounds, anon_rounds
            ));
        } else {
            lines.push(format!(
                "Both algorithms finished in the same number of rounds ({})",
                arb_rounds
            ));
        }
        lines.push(String::new());
    }
}

/// Signed difference and its share of the arbitrary run's value
fn delta(arbitrary: u64, anonymous: u64) -> (i64, f64) {
    let diff = arbitrary as i64 - anonymous as i64;
    let pct = if arbitrary > 0 {
        diff as f64 / arbitrary as f64 * 100.0
    } else {
        0.0
    };
    (diff, pct)
}

fn percentage_of(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}

fn format_leader(leader_id: Option<u32>) -> String {
    match leader_id {
        Some(id) => format!("Node {}", id),
        None => "none".to_string(),
    }
}

fn state_label(node: Option<&crate::parser::NodeRecord>) -> &str {
    match node {
        Some(record) if !record.final_state.is_empty() => &record.final_state,
        Some(_) => "",
        None => "N/A",
    }
}
