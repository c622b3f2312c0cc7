//! Paint model shared between the effect layer and renderers.
//!
//! Scope:
//! - color representation (encoded, non-linear, premultiplied alpha)
//! - paint sources (solid, radial gradient)
//! - blend modes
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod gradient;

pub use blend::BlendMode;
pub use color::Color;
pub use gradient::{ColorStop, RadialGradient};

/// Paint source for filling geometry.
///
/// Renderers dispatch on the variant; add variants here together with the
/// matching shader path in `render::fill`.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    RadialGradient(RadialGradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::RadialGradient(g)
    }
}
