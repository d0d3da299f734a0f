//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the replay core and an
//! external system. Implementations live in `src/adapters/`.

pub mod frame_sink;

pub use frame_sink::{Frame, FrameSink};
