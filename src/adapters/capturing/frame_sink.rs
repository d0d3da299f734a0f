//! Capture-only adapter for the `FrameSink` port.

use std::sync::{Arc, Mutex};

use crate::adapters::recording::record_frame;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::ReplayError;
use crate::ports::{Frame, FrameSink};

/// Accepts every frame and records it.
pub struct CapturingFrameSink {
    target: String,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl CapturingFrameSink {
    /// Create a sink that records into `recorder`, reporting itself as `target`.
    pub fn new(target: impl Into<String>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { target: target.into(), recorder }
    }
}

impl FrameSink for CapturingFrameSink {
    fn target(&self) -> &str {
        &self.target
    }

    fn send(&mut self, frame: &Frame) -> Result<(), ReplayError> {
        record_frame(&self.recorder, frame)
    }
}
