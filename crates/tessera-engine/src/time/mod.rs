//! Time subsystem.
//!
//! Provides the elapsed-time source the translator needs for animated sprites.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per frame and pass `FrameTime::elapsed` to the translator

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
