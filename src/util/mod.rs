//! Small shared utilities.

/// Frame delta time, elapsed time and FPS tracking.
pub mod frame_clock;

pub use frame_clock::FrameClock;
