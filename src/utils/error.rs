//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a trace log.
///
/// Malformed log content is never an error: the parser is permissive and
/// degrades to default-valued metrics instead. Only the file itself being
/// unreadable is fatal, and that is surfaced to the entry point.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read log file: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No node statistics in either run")]
    EmptyData,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
