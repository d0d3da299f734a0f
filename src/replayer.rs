//! Replays the ASCII file, then the hex file, line by line into a sink.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ReplayError;
use crate::ports::{Frame, FrameSink};
use crate::record::{ascii_record, hex_record, RecordError};
use crate::settings::ReplaySettings;

/// Frames and bytes written for one input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSummary {
    /// Frames written, one per input line.
    pub frames: usize,
    /// Total bytes written.
    pub bytes: usize,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// ASCII file totals.
    pub ascii: FileSummary,
    /// Hex file totals.
    pub hex: FileSummary,
}

impl ReplaySummary {
    /// Frames written across both files.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.ascii.frames + self.hex.frames
    }

    /// Bytes written across both files.
    #[must_use]
    pub fn bytes(&self) -> usize {
        self.ascii.bytes + self.hex.bytes
    }
}

/// Replay the ASCII file and then the hex file named in `settings`.
///
/// The first error stops the run. Frames already sent stay sent.
///
/// # Errors
///
/// Returns the first file, parse, or write error encountered.
pub fn run(
    settings: &ReplaySettings,
    sink: &mut dyn FrameSink,
) -> Result<ReplaySummary, ReplayError> {
    let ascii = replay_file(&settings.ascii_file, ascii_record, sink)?;
    let hex = replay_file(&settings.hex_file, hex_record, sink)?;
    Ok(ReplaySummary { ascii, hex })
}

/// Open `path` and replay each line through `transform`.
///
/// # Errors
///
/// Returns [`ReplayError::FileNotFound`] if the file cannot be opened, and
/// otherwise whatever [`replay_lines`] returns.
pub fn replay_file<F>(
    path: &Path,
    transform: F,
    sink: &mut dyn FrameSink,
) -> Result<FileSummary, ReplayError>
where
    F: FnMut(&str) -> Result<Vec<u8>, RecordError>,
{
    let file = File::open(path)
        .map_err(|source| ReplayError::FileNotFound { path: path.to_path_buf(), source })?;

    tracing::info!(file = %path.display(), sink = sink.target(), "replaying");
    let summary = replay_lines(BufReader::new(file), path, transform, sink)?;
    tracing::info!(
        file = %path.display(),
        frames = summary.frames,
        bytes = summary.bytes,
        "file done"
    );
    Ok(summary)
}

/// Read lines from `reader` in order, transform each one, and send it.
///
/// `path` only labels frames and errors.
///
/// # Errors
///
/// Fails on the first unreadable line, untransformable line, or failed send.
pub fn replay_lines<R, F>(
    reader: R,
    path: &Path,
    mut transform: F,
    sink: &mut dyn FrameSink,
) -> Result<FileSummary, ReplayError>
where
    R: BufRead,
    F: FnMut(&str) -> Result<Vec<u8>, RecordError>,
{
    let label = path.display().to_string();
    let mut summary = FileSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let text = line.map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;
        let data = transform(&text).map_err(|source| ReplayError::Parse {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;

        let frame = Frame { source: label.clone(), line: line_no, data };
        sink.send(&frame)?;
        tracing::debug!(file = %label, line = line_no, len = frame.data.len(), "frame sent");

        summary.frames += 1;
        summary.bytes += frame.data.len();
    }

    Ok(summary)
}
