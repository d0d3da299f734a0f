//! Capture-only adapters: frames go to a cassette, no device is opened.

pub mod frame_sink;
