//! Adapter implementations for port traits.
//!
//! - `live/` — Real serial device
//! - `recording/` — Real serial device plus a capture cassette
//! - `capturing/` — Capture cassette only, no device

pub mod capturing;
pub mod live;
pub mod recording;
