//! Line classification for simulation trace logs.
//!
//! Each recognizer tests one line of free text against one signal shape and
//! extracts a typed value. The two algorithm variants print their final
//! statistics with different field sets, so the classifier knows every shape
//! and the parser decides precedence.

use crate::utils::config::{FINISH_SECTION_MARKER, INFO_LINE_MARKER, LEADER_YES_TOKEN};
use regex::Regex;

/// A per-node statistics field extracted from one line.
///
/// Variants are listed in recognition priority order: `classify_field`
/// returns the first match, and a line is never re-tested against later
/// recognizers once one has fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSignal {
    /// `Node <id> statistics:` - a new per-node block begins
    NodeStart(u32),
    /// `Messages Sent: <n>`
    MessagesSent(u64),
    /// `Rounds Completed: <n>`
    RoundsCompleted(u32),
    /// `Final State: <word>` (anonymous election logs)
    FinalState(String),
    /// `Is Leader: YES|NO` (arbitrary election logs)
    LeaderFlag(bool),
    /// `Final Leader: <id>` (arbitrary election logs, lowest priority)
    FinalLeader(u32),
}

/// Compiled recognizers for every known line shape.
///
/// Compiled once per parser; all matching is read-only after that.
#[derive(Debug)]
pub struct LinePatterns {
    event: Regex,
    round: Regex,
    node_start: Regex,
    messages_sent: Regex,
    rounds_completed: Regex,
    final_state: Regex,
    leader_flag: Regex,
    final_leader: Regex,
}

impl LinePatterns {
    pub fn new() -> Self {
        // Hard-coded patterns, compilation cannot fail
        let compile = |pattern: &str| Regex::new(pattern).expect("hard-coded pattern");

        Self {
            event: compile(r"Event #(\d+)"),
            round: compile(r"(?i)round (\d+)"),
            node_start: compile(r"Node (\d+) statistics:"),
            messages_sent: compile(r"Messages Sent: (\d+)"),
            rounds_completed: compile(r"Rounds Completed: (\d+)"),
            final_state: compile(r"Final State: (\w+)"),
            leader_flag: compile(r"Is Leader: (\w+)"),
            final_leader: compile(r"Final Leader: (\d+)"),
        }
    }

    /// Extract the event sequence number from an `Event #<n>` line.
    ///
    /// Event numbers are not guaranteed increasing across a trace; the
    /// parser keeps a running maximum, so this recognizer only extracts.
    pub fn event_number(&self, line: &str) -> Option<u64> {
        self.capture_u64(&self.event, line)
    }

    /// Extract a round mention from an informational line.
    ///
    /// Matches case-insensitively, but only on lines carrying the `INFO:`
    /// marker; round mentions in other kernel chatter are noise. Returns the
    /// round number and the trimmed line text for the round-detail record.
    pub fn round_mention<'a>(&self, line: &'a str) -> Option<(u32, &'a str)> {
        if !line.contains(INFO_LINE_MARKER) {
            return None;
        }
        let round = self.capture_u32(&self.round, line)?;
        Some((round, line.trim()))
    }

    /// True for the line marking the start of the final-statistics phase
    pub fn is_finish_marker(&self, line: &str) -> bool {
        line.contains(FINISH_SECTION_MARKER)
    }

    /// Classify a line against the per-node field recognizers.
    ///
    /// First match wins, in the fixed order of the `FieldSignal` variants.
    /// Returns None for lines that carry no statistics field.
    pub fn classify_field(&self, line: &str) -> Option<FieldSignal> {
        if let Some(id) = self.capture_u32(&self.node_start, line) {
            return Some(FieldSignal::NodeStart(id));
        }
        if let Some(count) = self.capture_u64(&self.messages_sent, line) {
            return Some(FieldSignal::MessagesSent(count));
        }
        if let Some(rounds) = self.capture_u32(&self.rounds_completed, line) {
            return Some(FieldSignal::RoundsCompleted(rounds));
        }
        if let Some(caps) = self.final_state.captures(line) {
            return Some(FieldSignal::FinalState(caps[1].to_string()));
        }
        if let Some(caps) = self.leader_flag.captures(line) {
            return Some(FieldSignal::LeaderFlag(&caps[1] == LEADER_YES_TOKEN));
        }
        if let Some(id) = self.capture_u32(&self.final_leader, line) {
            return Some(FieldSignal::FinalLeader(id));
        }
        None
    }

    /// Run a single-capture-group pattern and parse the group as u64.
    /// Out-of-range digit runs count as no match.
    fn capture_u64(&self, pattern: &Regex, line: &str) -> Option<u64> {
        pattern.captures(line)?[1].parse().ok()
    }

    fn capture_u32(&self, pattern: &Regex, line: &str) -> Option<u32> {
        pattern.captures(line)?[1].parse().ok()
    }
}

impl Default for LinePatterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_number() {
        let patterns = LinePatterns::new();
        assert_eq!(
            patterns.event_number("** Event #42  t=0.3  ArbitraryRing.node[1]"),
            Some(42)
        );
        assert_eq!(patterns.event_number("no counter here"), None);
    }

    #[test]
    fn test_round_mention_requires_info_marker() {
        let patterns = LinePatterns::new();

        let hit = patterns.round_mention("INFO: Node 2 starting round 3 with L=2");
        assert_eq!(hit, Some((3, "INFO: Node 2 starting round 3 with L=2")));

        // Same text without the marker is noise
        assert_eq!(patterns.round_mention("Node 2 starting round 3 with L=2"), None);
    }

    #[test]
    fn test_round_mention_case_insensitive() {
        let patterns = LinePatterns::new();
        let hit = patterns.round_mention("  INFO: Round 7 complete  ");
        assert_eq!(hit, Some((7, "INFO: Round 7 complete")));
    }

    #[test]
    fn test_finish_marker() {
        let patterns = LinePatterns::new();
        assert!(patterns.is_finish_marker("** Calling finish() methods of modules"));
        assert!(!patterns.is_finish_marker("** Initializing modules"));
    }

    #[test]
    fn test_classify_node_start() {
        let patterns = LinePatterns::new();
        assert_eq!(
            patterns.classify_field("Node 6 statistics:"),
            Some(FieldSignal::NodeStart(6))
        );
    }

    #[test]
    fn test_classify_counter_fields() {
        let patterns = LinePatterns::new();
        assert_eq!(
            patterns.classify_field("  Messages Sent: 16"),
            Some(FieldSignal::MessagesSent(16))
        );
        assert_eq!(
            patterns.classify_field("  Rounds Completed: 4"),
            Some(FieldSignal::RoundsCompleted(4))
        );
    }

    #[test]
    fn test_classify_leader_fields() {
        let patterns = LinePatterns::new();
        assert_eq!(
            patterns.classify_field("  Final State: PASSIVE"),
            Some(FieldSignal::FinalState("PASSIVE".to_string()))
        );
        assert_eq!(
            patterns.classify_field("  Is Leader: YES"),
            Some(FieldSignal::LeaderFlag(true))
        );
        assert_eq!(
            patterns.classify_field("  Is Leader: NO"),
            Some(FieldSignal::LeaderFlag(false))
        );
        assert_eq!(
            patterns.classify_field("  Final Leader: 7"),
            Some(FieldSignal::FinalLeader(7))
        );
    }

    #[test]
    fn test_classify_unrelated_line() {
        let patterns = LinePatterns::new();
        assert_eq!(patterns.classify_field("** Running simulation..."), None);
    }
}
