//! Fluidmesh engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the effect layer:
//! window/event loop, surface management, frame timing, paint types, the
//! draw-list scene and the fill renderer that consumes it.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
