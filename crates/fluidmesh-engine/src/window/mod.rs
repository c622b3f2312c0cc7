//! Window + event loop.
//!
//! Owns the `winit` EventLoop and the single window, and attaches the GPU
//! surface to it.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
