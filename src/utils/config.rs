//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Default output file for the comparison chart
pub const DEFAULT_CHART_FILE: &str = "comparison_analysis.svg";

// Marker tokens for trace scanning. The simulation kernel prints the finish
// marker once, right before modules dump their final statistics; everything
// after it is the per-node statistics region.
pub const FINISH_SECTION_MARKER: &str = "Calling finish() methods";
pub const INFO_LINE_MARKER: &str = "INFO:";

// Tokens used in per-node statistics lines
pub const LEADER_STATE: &str = "LEADER";
pub const NON_LEADER_STATE: &str = "NON_LEADER";
pub const LEADER_YES_TOKEN: &str = "YES";

// First-line substrings identifying the algorithm that produced a log
pub const ARBITRARY_HINT: &str = "Arbitrary";
pub const ANONYMOUS_HINT: &str = "Anonymous";
