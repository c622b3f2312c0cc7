//! Radial gradient brush construction.

use fluidmesh_engine::coords::Vec2;
use fluidmesh_engine::paint::{Color, ColorStop, RadialGradient};

/// Builds a radial gradient from `(color, alpha)` pairs followed by a
/// transparent terminal stop.
///
/// Each color's alpha is replaced by its paired alpha. The `n + 1` stops are
/// spaced evenly over `[0, 1]`, so two pairs land at 0, 0.5 and 1. Past
/// `radius` the gradient pads with transparent.
pub fn radial_brush(stops: &[(Color, f32)], center: Vec2, radius: f32) -> RadialGradient {
    let last = stops.len();
    let step = if last == 0 { 1.0 } else { 1.0 / last as f32 };

    let mut out: Vec<ColorStop> = stops
        .iter()
        .enumerate()
        .map(|(i, &(color, alpha))| ColorStop::new(i as f32 * step, color.with_alpha(alpha)))
        .collect();
    out.push(ColorStop::new(1.0, Color::transparent()));

    RadialGradient::new(center, radius, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_pairs_produce_three_even_stops() {
        let pink = Color::from_argb_u32(0xFFFF0080);
        let cyan = Color::from_argb_u32(0xFF00E1FF);
        let g = radial_brush(&[(pink, 0.7), (cyan, 0.4)], Vec2::new(1.0, 2.0), 1500.0);

        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
        assert_eq!(g.stops[0].color, pink.with_alpha(0.7));
        assert_eq!(g.stops[1].color, cyan.with_alpha(0.4));
        assert_eq!(g.stops[2].color, Color::transparent());
        assert_eq!(g.center, Vec2::new(1.0, 2.0));
        assert_eq!(g.radius, 1500.0);
        assert!(g.is_valid());
    }

    #[test]
    fn empty_pairs_yield_single_transparent_stop() {
        let g = radial_brush(&[], Vec2::zero(), 10.0);
        assert_eq!(g.stops, vec![ColorStop::new(1.0, Color::transparent())]);
        assert!(!g.is_valid());
    }

    #[test]
    fn zero_radius_brush_is_invalid_but_samples() {
        let g = radial_brush(&[(Color::black(), 1.0)], Vec2::zero(), 0.0);
        assert!(!g.is_valid());
        assert_eq!(g.sample(Vec2::new(3.0, 3.0)), Color::transparent());
    }
}
