//! Frame timing and time-based animation.
//!
//! - one `FrameClock` per render loop; `tick()` once per presented frame
//! - `Spin` turns a rate in degrees per second into a frame-rate independent angle

mod frame_clock;
mod spin;

pub use frame_clock::{FrameClock, FrameTime};
pub use spin::Spin;
