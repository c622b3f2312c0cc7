//! Surface-derived geometry: center, radii and orbit points.

use fluidmesh_engine::coords::{Vec2, Viewport};

/// Point on the circle of `radius` around `center` at `angle_deg`.
///
/// 0° is +X, 90° is +Y (down on screen).
#[inline]
pub fn project_on_circle(angle_deg: f32, center: Vec2, radius: f32) -> Vec2 {
    center + Vec2::from_angle(angle_deg.to_radians()) * radius
}

/// Wraps degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f32) -> f32 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.
    if d >= 360.0 { 0.0 } else { d }
}

/// Center and radii for one surface size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceGeometry {
    pub viewport: Viewport,
    pub center: Vec2,
    /// `base_radius_scale × max(width, height)`; 0 on degenerate surfaces.
    pub base_radius: f32,
    /// Radius of the focal-point orbit.
    pub orbit_radius: f32,
}

impl SurfaceGeometry {
    pub fn new(viewport: Viewport, base_radius_scale: f32, orbit_scale: f32) -> Self {
        if !viewport.is_valid() {
            let center = viewport.center();
            return Self {
                viewport,
                center: if center.is_finite() { center } else { Vec2::zero() },
                base_radius: 0.0,
                orbit_radius: 0.0,
            };
        }

        let base_radius = viewport.max_side() * base_radius_scale;
        Self {
            viewport,
            center: viewport.center(),
            base_radius,
            orbit_radius: base_radius * orbit_scale,
        }
    }

    /// Nothing can be drawn: zero, negative or non-finite extent.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.viewport.is_valid() || !(self.base_radius > 0.0)
    }

    /// Orbit point for `angle_deg`.
    #[inline]
    pub fn focal_point(&self, angle_deg: f32) -> Vec2 {
        project_on_circle(angle_deg, self.center, self.orbit_radius)
    }

    #[inline]
    pub fn scaled_radius(&self, scale: f32) -> f32 {
        self.base_radius * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: Vec2, b: Vec2) -> bool { a.distance(b) < 1e-3 }

    // ── project_on_circle ─────────────────────────────────────────────────

    #[test]
    fn zero_degrees_is_plus_x() {
        let c = Vec2::new(500.0, 400.0);
        assert!(near(project_on_circle(0.0, c, 750.0), Vec2::new(1250.0, 400.0)));
    }

    #[test]
    fn ninety_degrees_is_plus_y() {
        let c = Vec2::new(500.0, 400.0);
        assert!(near(project_on_circle(90.0, c, 750.0), Vec2::new(500.0, 1150.0)));
    }

    #[test]
    fn one_eighty_degrees_is_minus_x() {
        let c = Vec2::new(10.0, 10.0);
        assert!(near(project_on_circle(180.0, c, 5.0), Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn full_turn_matches_zero() {
        let c = Vec2::new(3.0, 4.0);
        assert!(near(project_on_circle(360.0, c, 100.0), project_on_circle(0.0, c, 100.0)));
    }

    // ── normalize_degrees ─────────────────────────────────────────────────

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        let tiny = normalize_degrees(-1e-6);
        assert!((0.0..360.0).contains(&tiny));
    }

    // ── SurfaceGeometry ───────────────────────────────────────────────────

    #[test]
    fn radii_follow_larger_side() {
        let g = SurfaceGeometry::new(Viewport::new(1000.0, 800.0), 1.5, 0.5);
        assert_eq!(g.center, Vec2::new(500.0, 400.0));
        assert_eq!(g.base_radius, 1500.0);
        assert_eq!(g.orbit_radius, 750.0);
        assert_eq!(g.scaled_radius(0.8), 1200.0);

        let tall = SurfaceGeometry::new(Viewport::new(300.0, 600.0), 1.5, 0.5);
        assert_eq!(tall.base_radius, 900.0);
    }

    #[test]
    fn zero_surface_is_degenerate() {
        let g = SurfaceGeometry::new(Viewport::new(0.0, 0.0), 1.5, 0.5);
        assert!(g.is_degenerate());
        assert_eq!(g.base_radius, 0.0);
        assert_eq!(g.center, Vec2::zero());
        assert_eq!(g.focal_point(45.0), Vec2::zero());
    }

    #[test]
    fn negative_and_nan_surfaces_are_degenerate() {
        assert!(SurfaceGeometry::new(Viewport::new(-10.0, 20.0), 1.5, 0.5).is_degenerate());
        let nan = SurfaceGeometry::new(Viewport::new(f32::NAN, 20.0), 1.5, 0.5);
        assert!(nan.is_degenerate());
        assert!(nan.center.is_finite());
    }

    #[test]
    fn zero_scale_is_degenerate() {
        assert!(SurfaceGeometry::new(Viewport::new(100.0, 100.0), 0.0, 0.5).is_degenerate());
    }
}
