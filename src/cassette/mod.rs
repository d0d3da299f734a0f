//! Capture of every frame sent during a run, saved as a YAML cassette.

pub mod format;
pub mod recorder;
