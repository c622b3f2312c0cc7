//! Per-frame evaluation and draw emission.

use std::time::Duration;

use fluidmesh_engine::coords::{Vec2, Viewport};
use fluidmesh_engine::paint::{BlendMode, Color, RadialGradient};
use fluidmesh_engine::scene::{DrawList, ZIndex};

use crate::brush::radial_brush;
use crate::config::{Anchor, LayerSpec, MeshGradientConfig, COLOR_COUNT, FOCAL_COUNT};
use crate::error::ConfigError;
use crate::geometry::{normalize_degrees, SurfaceGeometry};

/// Everything visible in one frame, derived from `(elapsed, viewport, config)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshFrame {
    pub elapsed: Duration,
    pub geometry: SurfaceGeometry,
    /// Orbit angles in `[0, 360)`.
    pub angles: [f32; FOCAL_COUNT],
    /// Opaque animated colors.
    pub colors: [Color; COLOR_COUNT],
    pub focal_points: [Vec2; FOCAL_COUNT],
    /// One brush per configured layer, in paint order.
    pub brushes: Vec<RadialGradient>,
    pub background: Color,
}

impl MeshFrame {
    /// Nothing will be painted for this frame.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.geometry.is_degenerate()
    }
}

/// The fluid mesh backdrop.
///
/// Holds only configuration; there is no per-frame state, so one instance can
/// serve any number of surfaces.
#[derive(Debug, Clone, Default)]
pub struct MeshGradient {
    config: MeshGradientConfig,
}

impl MeshGradient {
    pub fn new(config: MeshGradientConfig) -> Self {
        Self { config }
    }

    /// Like [`new`](Self::new) but rejects invalid configurations.
    pub fn try_new(config: MeshGradientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &MeshGradientConfig {
        &self.config
    }

    /// Computes angles, colors, focal points and brushes at `elapsed`.
    pub fn evaluate(&self, elapsed: Duration, viewport: Viewport) -> MeshFrame {
        let cfg = &self.config;
        let geometry = SurfaceGeometry::new(viewport, cfg.base_radius_scale, cfg.orbit_scale);

        let angles = cfg.angles.map(|a| normalize_degrees(a.value_at(elapsed)));
        let colors = cfg.colors.map(|c| c.value_at(elapsed));
        let focal_points = angles.map(|deg| geometry.focal_point(deg));

        let brushes = cfg
            .layers
            .iter()
            .map(|layer| layer_brush(layer, &geometry, &colors, &focal_points))
            .collect();

        MeshFrame {
            elapsed,
            geometry,
            angles,
            colors,
            focal_points,
            brushes,
            background: cfg.background,
        }
    }

    /// Records the frame's fills: the opaque background, then each brush over
    /// the full surface with screen blending, back to front.
    ///
    /// Degenerate surfaces record nothing.
    pub fn paint_into(&self, frame: &MeshFrame, draw_list: &mut DrawList) {
        if frame.is_degenerate() {
            log::trace!("mesh gradient skipped: degenerate surface {:?}", frame.geometry.viewport);
            return;
        }

        let bounds = frame.geometry.viewport.bounds();
        draw_list.push_solid_fill(ZIndex::BACKDROP, bounds, frame.background);
        for brush in &frame.brushes {
            draw_list.push_fill(ZIndex::BACKDROP, bounds, brush.clone(), BlendMode::Screen);
        }
    }

    /// Evaluates and records one frame; returns the evaluated frame.
    pub fn draw(&self, elapsed: Duration, viewport: Viewport, draw_list: &mut DrawList) -> MeshFrame {
        let frame = self.evaluate(elapsed, viewport);
        self.paint_into(&frame, draw_list);
        frame
    }
}

fn layer_brush(
    layer: &LayerSpec,
    geometry: &SurfaceGeometry,
    colors: &[Color; COLOR_COUNT],
    focal_points: &[Vec2; FOCAL_COUNT],
) -> RadialGradient {
    let color = |i: usize| colors.get(i).copied().unwrap_or(Color::transparent());
    let center = match layer.anchor {
        Anchor::Focal(i) => focal_points.get(i).copied().unwrap_or(geometry.center),
        Anchor::Center => geometry.center,
    };

    radial_brush(
        &[
            (color(layer.inner), layer.inner_alpha),
            (color(layer.outer), layer.outer_alpha),
        ],
        center,
        geometry.scaled_radius(layer.radius_scale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluidmesh_engine::paint::Paint;
    use fluidmesh_engine::scene::DrawCmd;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }
    fn near(a: Vec2, b: Vec2) -> bool { a.distance(b) < 1e-2 }
    fn vp() -> Viewport { Viewport::new(1000.0, 800.0) }

    // ── evaluate ──────────────────────────────────────────────────────────

    #[test]
    fn frame_at_zero_matches_reference() {
        let mesh = MeshGradient::default();
        let f = mesh.evaluate(Duration::ZERO, vp());

        assert_eq!(f.angles, [0.0, 0.0]);

        let center = Vec2::new(500.0, 400.0);
        let orbit = Vec2::new(750.0, 0.0);
        assert!(near(f.focal_points[0], center + orbit));
        assert!(near(f.focal_points[1], center + orbit));

        assert_eq!(f.colors[0], Color::from_argb_u32(0xFFFF0080));
        assert_eq!(f.colors[1], Color::from_argb_u32(0xFF00E1FF));
        assert_eq!(f.colors[2], Color::from_argb_u32(0xFF00FF66));

        let [b1, b2, b3] = &f.brushes[..] else { panic!("expected three brushes") };

        assert!(near(b1.center, center + orbit));
        assert_eq!(b1.radius, 1500.0);
        assert_eq!(b1.stops[0].color, f.colors[0].with_alpha(0.7));
        assert_eq!(b1.stops[1].color, f.colors[1].with_alpha(0.4));
        assert_eq!(b1.stops[2].color, Color::transparent());

        assert!(near(b2.center, center + orbit));
        assert_eq!(b2.radius, 1500.0);
        assert_eq!(b2.stops[0].color, f.colors[1].with_alpha(0.7));
        assert_eq!(b2.stops[1].color, f.colors[2].with_alpha(0.4));

        assert_eq!(b3.center, center);
        assert_eq!(b3.radius, 1200.0);
        assert_eq!(b3.stops[0].color, f.colors[2].with_alpha(0.5));
        assert_eq!(b3.stops[1].color, f.colors[0].with_alpha(0.3));
        assert_eq!(b3.stops[2].color, Color::transparent());
    }

    #[test]
    fn half_period_puts_first_point_opposite() {
        let mesh = MeshGradient::default();
        let f = mesh.evaluate(ms(15_000), vp());
        assert!((f.angles[0] - 180.0).abs() < 1e-3);
        assert!(near(f.focal_points[0], Vec2::new(500.0 - 750.0, 400.0)));
    }

    #[test]
    fn second_angle_runs_backwards() {
        let mesh = MeshGradient::default();
        let f = mesh.evaluate(ms(6_250), vp());
        assert!((f.angles[1] - 270.0).abs() < 1e-3);
        assert!(near(f.focal_points[1], Vec2::new(500.0, 400.0 - 750.0)));
    }

    #[test]
    fn angles_stay_in_range() {
        let mesh = MeshGradient::default();
        for t in (0..120_000u64).step_by(97) {
            let f = mesh.evaluate(ms(t), vp());
            for a in f.angles {
                assert!((0.0..360.0).contains(&a), "angle {a} at {t}ms");
            }
        }
    }

    #[test]
    fn colors_return_after_full_ping_pong() {
        let mesh = MeshGradient::default();
        let a = mesh.evaluate(ms(3_210), vp());
        let b = mesh.evaluate(ms(3_210 + 16_000), vp());
        assert_eq!(a.colors[0], b.colors[0]);
        let c = mesh.evaluate(ms(3_210 + 24_000), vp());
        assert_eq!(a.colors[1], c.colors[1]);
    }

    #[test]
    fn colors_reach_target_at_period_end() {
        let mesh = MeshGradient::default();
        let f = mesh.evaluate(ms(8_000), vp());
        assert_eq!(f.colors[0], Color::from_argb_u32(0xFF7928CA));
    }

    #[test]
    fn evaluate_is_pure() {
        let mesh = MeshGradient::default();
        assert_eq!(mesh.evaluate(ms(4_321), vp()), mesh.evaluate(ms(4_321), vp()));
    }

    // ── paint_into ────────────────────────────────────────────────────────

    #[test]
    fn records_background_then_three_screen_fills() {
        let mesh = MeshGradient::default();
        let mut dl = DrawList::new();
        let frame = mesh.draw(ms(1_000), vp(), &mut dl);

        let fills: Vec<_> = dl.fills_in_paint_order().cloned().collect();
        assert_eq!(fills.len(), 4);

        assert_eq!(fills[0].paint, Paint::Solid(Color::black()));
        assert_eq!(fills[0].blend, BlendMode::Normal);

        for (fill, brush) in fills[1..].iter().zip(&frame.brushes) {
            assert_eq!(fill.blend, BlendMode::Screen);
            assert_eq!(fill.rect, vp().bounds());
            assert_eq!(fill.paint, Paint::RadialGradient(brush.clone()));
        }
    }

    #[test]
    fn degenerate_surface_records_nothing() {
        let mesh = MeshGradient::default();
        let mut dl = DrawList::new();
        let frame = mesh.draw(ms(500), Viewport::new(0.0, 0.0), &mut dl);
        assert!(frame.is_degenerate());
        assert!(dl.is_empty());
        assert!(frame.brushes.iter().all(|b| b.radius == 0.0));
    }

    #[test]
    fn draw_list_items_are_fills() {
        let mesh = MeshGradient::default();
        let mut dl = DrawList::new();
        mesh.draw(Duration::ZERO, vp(), &mut dl);
        assert!(dl.items().iter().all(|i| matches!(i.cmd, DrawCmd::Fill(_))));
    }

    // ── try_new ───────────────────────────────────────────────────────────

    #[test]
    fn try_new_rejects_invalid_config() {
        let mut cfg = MeshGradientConfig::default();
        cfg.angles[0].period = Duration::ZERO;
        assert!(MeshGradient::try_new(cfg).is_err());
        assert!(MeshGradient::try_new(MeshGradientConfig::default()).is_ok());
    }
}
