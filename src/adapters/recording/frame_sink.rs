//! Recording adapter for the `FrameSink` port.

use std::sync::{Arc, Mutex};

use super::record_frame;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::ReplayError;
use crate::ports::{Frame, FrameSink};

/// Records frames while delegating to an inner sink.
///
/// Only frames the inner sink accepted are recorded.
pub struct RecordingFrameSink {
    inner: Box<dyn FrameSink>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFrameSink {
    /// Creates a new recording sink wrapping the given implementation.
    pub fn new(inner: Box<dyn FrameSink>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl FrameSink for RecordingFrameSink {
    fn target(&self) -> &str {
        self.inner.target()
    }

    fn send(&mut self, frame: &Frame) -> Result<(), ReplayError> {
        self.inner.send(frame)?;
        record_frame(&self.recorder, frame)
    }
}
