//! Frame timing.
//!
//! One `FrameClock` per surface; `tick()` once per presented frame. Scenes
//! receive the resulting `FrameTime` and never read the wall clock themselves.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
