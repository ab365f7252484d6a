//! Data model for parsed election runs.
//!
//! These structs are both the parser's result type and the JSON schema
//! written to disk. Schema is versioned to allow future evolution.

use crate::utils::config::{ANONYMOUS_HINT, ARBITRARY_HINT, REPORT_SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which election algorithm produced a log, inferred from its first line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Arbitrary,
    Anonymous,
    Unknown,
}

impl Algorithm {
    /// Detect the algorithm from the first line of a log.
    ///
    /// Simulation banners name the network they load, so a plain substring
    /// check is enough. Anything unrecognized (including an empty log) maps
    /// to `Unknown`.
    pub fn detect(first_line: &str) -> Self {
        if first_line.contains(ARBITRARY_HINT) {
            Algorithm::Arbitrary
        } else if first_line.contains(ANONYMOUS_HINT) {
            Algorithm::Anonymous
        } else {
            Algorithm::Unknown
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Algorithm::Arbitrary => "Arbitrary Election",
            Algorithm::Anonymous => "Anonymous Election",
            Algorithm::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One election participant's observed outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node index, unique within a run
    pub node_id: u32,

    /// Messages this node sent over the whole run
    pub messages_sent: u64,

    /// Rounds this node participated in
    pub rounds_completed: u32,

    /// Final state label ("LEADER", "NON_LEADER", "ACTIVE", "PASSIVE"),
    /// empty if the log never stated one
    pub final_state: String,

    /// Whether this node ended the run as the elected leader
    pub is_leader: bool,
}

impl NodeRecord {
    /// Fresh record for a node whose statistics block just started.
    /// All counters at zero, state undetermined.
    pub fn new(node_id: u32) -> Self {
        Self {
            node_id,
            messages_sent: 0,
            rounds_completed: 0,
            final_state: String::new(),
            is_leader: false,
        }
    }
}

/// The complete parse result for one log file.
///
/// Immutable once returned by the parser; this is the sole artifact handed
/// to the report and chart renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Algorithm that produced the run
    pub algorithm: Algorithm,

    /// Sum of `messages_sent` over retained nodes
    pub total_messages: u64,

    /// Maximum `rounds_completed` over retained nodes, 0 if none
    pub total_rounds: u32,

    /// Id of the first retained node marked leader, None if no leader signal
    pub leader_id: Option<u32>,

    /// Highest event sequence number seen anywhere in the log, 0 if none
    pub total_events: u64,

    /// Retained node records, in completion order
    pub node_records: Vec<NodeRecord>,

    /// Informational lines mentioning each round, keyed by round number
    pub round_details: BTreeMap<u32, Vec<String>>,
}

impl RunMetrics {
    /// Look up a node's record by id, or None if the run never retained it.
    ///
    /// **Public** - the report renderer aligns both runs' tables over node
    /// ids and treats missing rows as absent.
    pub fn node_record(&self, node_id: u32) -> Option<&NodeRecord> {
        self.node_records.iter().find(|n| n.node_id == node_id)
    }

    /// Messages per completed round, 0.0 for a run with no rounds
    pub fn messages_per_round(&self) -> f64 {
        if self.total_rounds > 0 {
            self.total_messages as f64 / self.total_rounds as f64
        } else {
            0.0
        }
    }
}

/// Top-level comparison report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Metrics parsed from the arbitrary election log
    pub arbitrary: RunMetrics,

    /// Metrics parsed from the anonymous election log
    pub anonymous: RunMetrics,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl AnalysisReport {
    pub fn new(arbitrary: RunMetrics, anonymous: RunMetrics) -> Self {
        use chrono::Utc;

        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            arbitrary,
            anonymous,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_detect() {
        assert_eq!(
            Algorithm::detect("Preparing for initializing network ArbitraryRing"),
            Algorithm::Arbitrary
        );
        assert_eq!(
            Algorithm::detect("Preparing for initializing network AnonymousRing"),
            Algorithm::Anonymous
        );
        assert_eq!(Algorithm::detect("OMNeT++ Discrete Event Simulation"), Algorithm::Unknown);
        assert_eq!(Algorithm::detect(""), Algorithm::Unknown);
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Arbitrary.to_string(), "Arbitrary Election");
        assert_eq!(Algorithm::Anonymous.to_string(), "Anonymous Election");
        assert_eq!(Algorithm::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_node_record_defaults() {
        let record = NodeRecord::new(3);
        assert_eq!(record.node_id, 3);
        assert_eq!(record.messages_sent, 0);
        assert_eq!(record.rounds_completed, 0);
        assert!(record.final_state.is_empty());
        assert!(!record.is_leader);
    }

    #[test]
    fn test_node_record_lookup() {
        let metrics = RunMetrics {
            algorithm: Algorithm::Arbitrary,
            total_messages: 10,
            total_rounds: 2,
            leader_id: Some(5),
            total_events: 40,
            node_records: vec![NodeRecord::new(0), NodeRecord::new(5)],
            round_details: BTreeMap::new(),
        };

        assert_eq!(metrics.node_record(5).map(|n| n.node_id), Some(5));
        assert!(metrics.node_record(7).is_none());
    }

    #[test]
    fn test_messages_per_round_zero_rounds() {
        let metrics = RunMetrics {
            algorithm: Algorithm::Unknown,
            total_messages: 12,
            total_rounds: 0,
            leader_id: None,
            total_events: 0,
            node_records: Vec::new(),
            round_details: BTreeMap::new(),
        };

        assert_eq!(metrics.messages_per_round(), 0.0);
    }
}
