//! Named configuration: animation drivers, layer layout and scales.

use std::time::Duration;

use fluidmesh_engine::paint::Color;

use crate::anim::Periodic;
use crate::error::ConfigError;

/// Number of orbiting focal points.
pub const FOCAL_COUNT: usize = 2;
/// Number of animated colors.
pub const COLOR_COUNT: usize = 3;
/// Number of gradient layers painted per frame.
pub const LAYER_COUNT: usize = 3;

/// Where a layer's gradient is centered.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Anchor {
    /// The orbiting point driven by `angles[i]`.
    Focal(usize),
    /// The surface center; does not move.
    Center,
}

/// One radial gradient layer.
///
/// Stops are `colors[inner] @ inner_alpha`, `colors[outer] @ outer_alpha`,
/// then transparent, evenly spaced from the center out to
/// `base_radius × radius_scale`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerSpec {
    pub inner: usize,
    pub inner_alpha: f32,
    pub outer: usize,
    pub outer_alpha: f32,
    pub anchor: Anchor,
    pub radius_scale: f32,
}

impl LayerSpec {
    pub const fn new(
        inner: (usize, f32),
        outer: (usize, f32),
        anchor: Anchor,
        radius_scale: f32,
    ) -> Self {
        Self {
            inner: inner.0,
            inner_alpha: inner.1,
            outer: outer.0,
            outer_alpha: outer.1,
            anchor,
            radius_scale,
        }
    }
}

/// Every constant the effect uses.
///
/// `Default` reproduces the reference look exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGradientConfig {
    /// Orbit angles in degrees.
    pub angles: [Periodic<f32>; FOCAL_COUNT],
    pub colors: [Periodic<Color>; COLOR_COUNT],
    /// Base radius = `base_radius_scale × max(width, height)`.
    pub base_radius_scale: f32,
    /// Orbit radius = `orbit_scale × base radius`.
    pub orbit_scale: f32,
    /// Painted back to front with screen blending.
    pub layers: [LayerSpec; LAYER_COUNT],
    /// Opaque fill under the layers.
    pub background: Color,
}

impl Default for MeshGradientConfig {
    fn default() -> Self {
        Self {
            angles: [
                Periodic::restart(0.0, 360.0, Duration::from_millis(30_000)),
                Periodic::restart(360.0, 0.0, Duration::from_millis(25_000)),
            ],
            colors: [
                // hot pink <-> purple
                Periodic::reverse(
                    Color::from_argb_u32(0xFFFF0080),
                    Color::from_argb_u32(0xFF7928CA),
                    Duration::from_millis(8_000),
                ),
                // cyan <-> red
                Periodic::reverse(
                    Color::from_argb_u32(0xFF00E1FF),
                    Color::from_argb_u32(0xFFFF4D4D),
                    Duration::from_millis(12_000),
                ),
                // neon green <-> orange
                Periodic::reverse(
                    Color::from_argb_u32(0xFF00FF66),
                    Color::from_argb_u32(0xFFFF8A00),
                    Duration::from_millis(10_000),
                ),
            ],
            base_radius_scale: 1.5,
            orbit_scale: 0.5,
            layers: [
                LayerSpec::new((0, 0.7), (1, 0.4), Anchor::Focal(0), 1.0),
                LayerSpec::new((1, 0.7), (2, 0.4), Anchor::Focal(1), 1.0),
                // fixed at the surface center
                LayerSpec::new((2, 0.5), (0, 0.3), Anchor::Center, 0.8),
            ],
            background: Color::black(),
        }
    }
}

impl MeshGradientConfig {
    /// Checks periods, scales, alphas and indices.
    ///
    /// Evaluation never panics on an invalid config, but the output is not
    /// meaningful; hosts that build configs at runtime should call this first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, a) in self.angles.iter().enumerate() {
            if a.period.is_zero() {
                return Err(ConfigError::new(format!("angles[{i}].period"), "must be non-zero"));
            }
            if !a.start.is_finite() || !a.end.is_finite() {
                return Err(ConfigError::new(format!("angles[{i}]"), "endpoints must be finite"));
            }
        }

        for (i, c) in self.colors.iter().enumerate() {
            if c.period.is_zero() {
                return Err(ConfigError::new(format!("colors[{i}].period"), "must be non-zero"));
            }
            if !c.start.is_finite() || !c.end.is_finite() {
                return Err(ConfigError::new(format!("colors[{i}]"), "endpoints must be finite"));
            }
        }

        check_scale("base_radius_scale", self.base_radius_scale)?;
        check_scale("orbit_scale", self.orbit_scale)?;

        for (i, layer) in self.layers.iter().enumerate() {
            check_scale(&format!("layers[{i}].radius_scale"), layer.radius_scale)?;
            check_alpha(&format!("layers[{i}].inner_alpha"), layer.inner_alpha)?;
            check_alpha(&format!("layers[{i}].outer_alpha"), layer.outer_alpha)?;

            for (name, idx) in [("inner", layer.inner), ("outer", layer.outer)] {
                if idx >= COLOR_COUNT {
                    return Err(ConfigError::new(
                        format!("layers[{i}].{name}"),
                        format!("color index {idx} out of range (0..{COLOR_COUNT})"),
                    ));
                }
            }

            if let Anchor::Focal(f) = layer.anchor {
                if f >= FOCAL_COUNT {
                    return Err(ConfigError::new(
                        format!("layers[{i}].anchor"),
                        format!("focal index {f} out of range (0..{FOCAL_COUNT})"),
                    ));
                }
            }
        }

        if !self.background.is_finite() {
            return Err(ConfigError::new("background", "must be finite"));
        }

        Ok(())
    }
}

fn check_scale(field: &str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::new(field, format!("expected a finite, non-negative scale, got {v}")))
    }
}

fn check_alpha(field: &str, v: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(ConfigError::new(field, format!("alpha {v} outside [0, 1]")))
    }
}
