//! Trace scanner for simulation log files.
//!
//! Walks a log's lines once, left to right, and folds classified signals
//! into one `RunMetrics`. The scanner is deliberately permissive: unexpected
//! line shapes, missing sections and incomplete node blocks degrade the
//! result instead of failing the parse.

use super::line::{FieldSignal, LinePatterns};
use super::schema::{Algorithm, NodeRecord, RunMetrics};
use crate::utils::config::{LEADER_STATE, NON_LEADER_STATE};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Scan position within a log.
///
/// The transition is one-way: once the finish marker is seen, the scanner
/// stays in the statistics region for the remainder of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Simulation output before the finish marker
    Preamble,
    /// The per-node final statistics region
    FinishStats,
}

/// Mutable state for a single scan.
///
/// Lives only for the duration of one `parse_str` call, so repeated parses
/// of the same text cannot influence each other.
struct ScanState {
    section: Section,
    current: Option<NodeRecord>,
    completed: Vec<NodeRecord>,
    max_event: u64,
    round_details: BTreeMap<u32, Vec<String>>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            section: Section::Preamble,
            current: None,
            completed: Vec::new(),
            max_event: 0,
            round_details: BTreeMap::new(),
        }
    }

    /// Finalize the in-progress node record, if any.
    ///
    /// A record with zero observed messages is a node header with no
    /// accompanying statistics; it is dropped as incomplete.
    fn complete_current(&mut self) {
        if let Some(node) = self.current.take() {
            if node.messages_sent > 0 {
                self.completed.push(node);
            } else {
                debug!("Dropping node {} record with no observed messages", node.node_id);
            }
        }
    }
}

/// Single-pass parser turning one log file into one `RunMetrics`.
///
/// The parser value holds only compiled patterns; every parse builds its
/// scan state from scratch, so parsing is a pure function of the input.
#[derive(Debug, Default)]
pub struct TraceParser {
    patterns: LinePatterns,
}

impl TraceParser {
    pub fn new() -> Self {
        Self {
            patterns: LinePatterns::new(),
        }
    }

    /// Parse a log file from disk.
    ///
    /// **Public** - main entry point for file input
    ///
    /// # Errors
    /// * `ParseError::ReadFailed` - the file is missing or unreadable; this
    ///   is the only fatal condition and is surfaced to the caller
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<RunMetrics, ParseError> {
        let path = path.as_ref();
        debug!("Reading log file: {}", path.display());

        let text = fs::read_to_string(path)?;
        Ok(self.parse_str(&text))
    }

    /// Parse log text already in memory.
    ///
    /// **Public** - main entry point for parsing
    ///
    /// A malformed or empty log yields all-zero aggregates and an empty node
    /// list rather than an error.
    pub fn parse_str(&self, log: &str) -> RunMetrics {
        let mut state = ScanState::new();

        for line in log.lines() {
            self.scan_line(&mut state, line);
        }

        // The last node block ends with the file, not with another header
        state.complete_current();

        let algorithm = Algorithm::detect(log.lines().next().unwrap_or(""));

        let total_messages = state.completed.iter().map(|n| n.messages_sent).sum();
        let total_rounds = state
            .completed
            .iter()
            .map(|n| n.rounds_completed)
            .max()
            .unwrap_or(0);
        let leader_id = state
            .completed
            .iter()
            .find(|n| n.is_leader)
            .map(|n| n.node_id);

        info!(
            "Parsed {} log: {} nodes, {} messages, {} rounds, {} events",
            algorithm,
            state.completed.len(),
            total_messages,
            total_rounds,
            state.max_event
        );

        RunMetrics {
            algorithm,
            total_messages,
            total_rounds,
            leader_id,
            total_events: state.max_event,
            node_records: state.completed,
            round_details: state.round_details,
        }
    }

    /// Fold one line into the scan state.
    ///
    /// **Private** - the per-line step of the state machine
    fn scan_line(&self, state: &mut ScanState, line: &str) {
        // The event counter and round mentions are tracked in any section
        if let Some(event) = self.patterns.event_number(line) {
            state.max_event = state.max_event.max(event);
        }
        if let Some((round, text)) = self.patterns.round_mention(line) {
            state
                .round_details
                .entry(round)
                .or_default()
                .push(text.to_string());
        }

        if self.patterns.is_finish_marker(line) {
            state.section = Section::FinishStats;
            return;
        }

        // Field extraction only happens in the statistics region
        if state.section == Section::Preamble {
            return;
        }

        match self.patterns.classify_field(line) {
            Some(FieldSignal::NodeStart(node_id)) => {
                state.complete_current();
                state.current = Some(NodeRecord::new(node_id));
            }
            Some(signal) => {
                // Stray statistics lines before any node header are noise
                if let Some(node) = state.current.as_mut() {
                    apply_field(node, signal);
                }
            }
            None => {}
        }
    }
}

/// Apply one classified field to the in-progress record.
///
/// The leader signals are precedence-ordered: an explicit `Final State`
/// always wins, the `Is Leader` flag derives a state label only when none
/// is set, and the `Final Leader` id comparison runs only as a last resort
/// and never overwrites an established state.
fn apply_field(node: &mut NodeRecord, signal: FieldSignal) {
    match signal {
        FieldSignal::MessagesSent(count) => node.messages_sent = count,
        FieldSignal::RoundsCompleted(rounds) => node.rounds_completed = rounds,
        FieldSignal::FinalState(state) => {
            node.is_leader = state == LEADER_STATE;
            node.final_state = state;
        }
        FieldSignal::LeaderFlag(is_leader) => {
            node.is_leader = is_leader;
            if node.final_state.is_empty() {
                node.final_state = leader_state_label(is_leader);
            }
        }
        FieldSignal::FinalLeader(leader_id) => {
            if node.final_state.is_empty() {
                node.is_leader = leader_id == node.node_id;
                node.final_state = leader_state_label(node.is_leader);
            }
        }
        // Handled by the scanner before field application
        FieldSignal::NodeStart(_) => {}
    }
}

fn leader_state_label(is_leader: bool) -> String {
    if is_leader {
        LEADER_STATE.to_string()
    } else {
        NON_LEADER_STATE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(log: &str) -> RunMetrics {
        TraceParser::new().parse_str(log)
    }

    #[test]
    fn test_empty_log() {
        let metrics = parse("");
        assert_eq!(metrics.algorithm, Algorithm::Unknown);
        assert_eq!(metrics.total_messages, 0);
        assert_eq!(metrics.total_rounds, 0);
        assert_eq!(metrics.total_events, 0);
        assert_eq!(metrics.leader_id, None);
        assert!(metrics.node_records.is_empty());
        assert!(metrics.round_details.is_empty());
    }

    #[test]
    fn test_fields_ignored_before_finish_marker() {
        let log = "\
AnonymousRing simulation
Node 0 statistics:
  Messages Sent: 9
";
        let metrics = parse(log);
        assert!(metrics.node_records.is_empty());
    }

    #[test]
    fn test_stray_field_before_node_header() {
        let log = "\
AnonymousRing simulation
** Calling finish() methods of modules
  Messages Sent: 9
Node 0 statistics:
  Messages Sent: 4
";
        let metrics = parse(log);
        assert_eq!(metrics.node_records.len(), 1);
        assert_eq!(metrics.node_records[0].messages_sent, 4);
    }

    #[test]
    fn test_last_node_completed_at_end_of_input() {
        let log = "\
ArbitraryRing simulation
** Calling finish() methods of modules
Node 2 statistics:
  Messages Sent: 5
  Rounds Completed: 2
";
        let metrics = parse(log);
        assert_eq!(metrics.node_records.len(), 1);
        assert_eq!(metrics.node_records[0].node_id, 2);
        assert_eq!(metrics.total_rounds, 2);
    }

    #[test]
    fn test_zero_message_node_dropped_on_next_header() {
        let log = "\
ArbitraryRing simulation
** Calling finish() methods of modules
Node 0 statistics:
  Rounds Completed: 3
Node 1 statistics:
  Messages Sent: 6
";
        let metrics = parse(log);
        assert_eq!(metrics.node_records.len(), 1);
        assert_eq!(metrics.node_records[0].node_id, 1);
    }

    #[test]
    fn test_leader_flag_derives_state_only_when_unset() {
        let log = "\
AnonymousRing simulation
** Calling finish() methods of modules
Node 3 statistics:
  Final State: ACTIVE
  Is Leader: YES
  Messages Sent: 2
";
        let metrics = parse(log);
        let node = &metrics.node_records[0];
        // The flag updates leadership but must not clobber the stated label
        assert!(node.is_leader);
        assert_eq!(node.final_state, "ACTIVE");
    }

    #[test]
    fn test_final_leader_never_overrides_established_state() {
        let log = "\
ArbitraryRing simulation
** Calling finish() methods of modules
Node 4 statistics:
  Final State: LEADER
  Final Leader: 3
  Messages Sent: 8
";
        let metrics = parse(log);
        let node = &metrics.node_records[0];
        assert!(node.is_leader);
        assert_eq!(node.final_state, "LEADER");
        assert_eq!(metrics.leader_id, Some(4));
    }

    #[test]
    fn test_repeated_field_overwrites() {
        let log = "\
ArbitraryRing simulation
** Calling finish() methods of modules
Node 0 statistics:
  Messages Sent: 5
  Messages Sent: 7
";
        let metrics = parse(log);
        assert_eq!(metrics.node_records[0].messages_sent, 7);
    }

    #[test]
    fn test_round_details_collected_outside_finish_section() {
        let log = "\
ArbitraryRing simulation
INFO: Node 0 starting round 1 with L=0
INFO: Node 1 starting round 1 with L=1
some kernel chatter about round 9
** Calling finish() methods of modules
";
        let metrics = parse(log);
        assert_eq!(metrics.round_details.len(), 1);
        assert_eq!(metrics.round_details[&1].len(), 2);
        assert!(!metrics.round_details.contains_key(&9));
    }
}
