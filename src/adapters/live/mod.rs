//! Live adapters that talk to real hardware.

pub mod serial;
