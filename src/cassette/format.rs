//! On-disk cassette layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::Frame;

/// A complete capture session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Session name.
    pub name: String,
    /// When the capture was finished.
    pub recorded_at: DateTime<Utc>,
    /// Device the frames were addressed to.
    pub device: String,
    /// Baud rate the device was (or would have been) opened with.
    pub baud_rate: u32,
    /// Frames in the order they were sent.
    pub frames: Vec<CapturedFrame>,
}

/// A frame with its position in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedFrame {
    /// Write order, starting at 0.
    pub seq: u64,
    /// The frame itself.
    #[serde(flatten)]
    pub frame: Frame,
}
