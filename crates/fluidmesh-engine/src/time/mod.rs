//! Time subsystem.
//!
//! Provides frame timing without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window, created when its surface is attached
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - drive animations from `FrameTime::elapsed`, never from accumulated `dt`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
