//! Records frames into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, CapturedFrame};
use crate::ports::Frame;

/// Records frames and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    device: String,
    baud_rate: u32,
    frames: Vec<CapturedFrame>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        device: impl Into<String>,
        baud_rate: u32,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            device: device.into(),
            baud_rate,
            frames: Vec::new(),
            next_seq: 0,
        }
    }

    /// Record a frame. The `seq` field is assigned automatically.
    pub fn record(&mut self, frame: &Frame) {
        self.frames.push(CapturedFrame { seq: self.next_seq, frame: frame.clone() });
        self.next_seq += 1;
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            device: self.device,
            baud_rate: self.baud_rate,
            frames: self.frames,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
