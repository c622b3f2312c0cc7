//! Fluid mesh gradient backdrop.
//!
//! Several radial gradients whose centers orbit the surface and whose colors
//! cycle independently, screen-blended over black. Every visible value is a
//! pure function of elapsed time, the surface size and a [`MeshGradientConfig`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`anim`] | `Periodic`, `RepeatMode`, `Lerp` |
//! | [`config`] | `MeshGradientConfig`, `LayerSpec`, `Anchor` |
//! | [`error`] | `ConfigError` |
//! | [`geometry`] | `project_on_circle`, `SurfaceGeometry` |
//! | [`brush`] | `radial_brush` |
//! | [`mesh`] | `MeshGradient`, `MeshFrame` |
//! | [`raster`] | CPU reference compositor |
//!
//! # Per-frame usage
//!
//! ```rust,ignore
//! let mesh = MeshGradient::new(MeshGradientConfig::default());
//! // inside the host's refresh callback:
//! draw_list.clear();
//! mesh.draw(frame_time.elapsed, viewport, &mut draw_list);
//! fill_renderer.render(rctx, target, &mut draw_list);
//! ```

pub mod anim;
pub mod brush;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod raster;

pub use anim::{Easing, Lerp, Periodic, RepeatMode};
pub use config::{Anchor, LayerSpec, MeshGradientConfig};
pub use error::ConfigError;
pub use mesh::{MeshFrame, MeshGradient};
