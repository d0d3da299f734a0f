//! Recording adapters that capture frames to cassettes.

pub mod frame_sink;

use std::sync::{Arc, Mutex};

use crate::cassette::recorder::CassetteRecorder;
use crate::error::ReplayError;
use crate::ports::Frame;

/// Append a sent frame to the shared recorder.
pub(crate) fn record_frame(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    frame: &Frame,
) -> Result<(), ReplayError> {
    let mut guard =
        recorder.lock().map_err(|e| ReplayError::Capture(format!("recorder lock poisoned: {e}")))?;
    guard.record(frame);
    Ok(())
}
