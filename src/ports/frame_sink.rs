//! Frame sink port: where replayed bytes go.

use serde::{Deserialize, Serialize};

use crate::error::ReplayError;

/// One input line turned into bytes, with the place it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Input file the line was read from, as given on the command line.
    pub source: String,
    /// 1-based line number within `source`.
    pub line: usize,
    /// Bytes to write to the device.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Accepts frames in order and pushes them to a device or a capture.
pub trait FrameSink: Send {
    /// Human-readable name of the destination, used in logs and errors.
    fn target(&self) -> &str;

    /// Write one frame, blocking until it has been accepted in full.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination rejects the bytes or times out.
    fn send(&mut self, frame: &Frame) -> Result<(), ReplayError>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as base64 string.
    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    /// Deserialize base64 string to bytes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
