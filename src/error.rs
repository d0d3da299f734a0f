//! Unified error type for uart-replay.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordError;

/// Errors that abort a replay run.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The serial device could not be opened.
    #[error("Failed to open serial device {device}: {source}")]
    Connection {
        /// Device path that was opened.
        device: String,
        /// Underlying serialport error.
        source: serialport::Error,
    },

    /// An input file is missing or cannot be opened.
    #[error("Cannot open input file {}: {source}", path.display())]
    FileNotFound {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An input file failed while it was being read.
    #[error("Failed to read {} at line {line}: {source}", path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line could not be turned into bytes.
    #[error("Parse error in {} at line {line}: {source}", path.display())]
    Parse {
        /// Path of the input file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        source: RecordError,
    },

    /// The device did not accept the bytes within the configured timeout.
    #[error("Write to {device} timed out")]
    WriteTimeout {
        /// Device path being written.
        device: String,
    },

    /// Writing to the device failed for a reason other than a timeout.
    #[error("Write to {device} failed: {source}")]
    Write {
        /// Device path being written.
        device: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The capture cassette could not be written.
    #[error("Capture error: {0}")]
    Capture(String),
}
