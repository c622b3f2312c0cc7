use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected in ascending `t` order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Radial gradient definition in logical pixel space.
///
/// Semantics:
/// - the gradient parameter at `p` is `|p - center| / radius`
/// - stops define premultiplied colors; between stops the color is
///   interpolated in straight alpha, the way 2D canvas gradients blend
/// - past `radius` (and before the first stop) the edge stop is held
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }

    /// Color at logical position `p`.
    ///
    /// A non-positive radius collapses the gradient onto its outermost stop.
    pub fn sample(&self, p: Vec2) -> Color {
        let Some(last) = self.stops.last() else {
            return Color::transparent();
        };
        if !(self.radius > 0.0) {
            return last.color;
        }
        self.color_at(p.distance(self.center) / self.radius)
    }

    /// Color at gradient parameter `t`; values outside the stops pad.
    pub fn color_at(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::transparent();
        };
        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return Color::lerp_straight(a.color, b.color, (t - a.t) / span);
            }
        }

        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool { (a - b).abs() < 1e-4 }

    fn red_to_clear(center: Vec2, radius: f32) -> RadialGradient {
        RadialGradient::new(
            center,
            radius,
            vec![
                ColorStop::new(0.0, Color::from_straight(1.0, 0.0, 0.0, 1.0)),
                ColorStop::new(1.0, Color::transparent()),
            ],
        )
    }

    // ── sample ────────────────────────────────────────────────────────────

    #[test]
    fn sample_center_is_first_stop() {
        let g = red_to_clear(Vec2::new(50.0, 50.0), 100.0);
        assert_eq!(g.sample(Vec2::new(50.0, 50.0)), g.stops[0].color);
    }

    #[test]
    fn sample_past_radius_pads_to_last_stop() {
        let g = red_to_clear(Vec2::zero(), 10.0);
        assert_eq!(g.sample(Vec2::new(100.0, 0.0)), Color::transparent());
    }

    #[test]
    fn sample_midway_interpolates_straight_channels() {
        let g = red_to_clear(Vec2::zero(), 10.0);
        let (r, gr, b, a) = g.sample(Vec2::new(0.0, 5.0)).to_straight();
        assert!(close(a, 0.5));
        assert!(close(r, 0.5));
        assert!(close(gr, 0.0) && close(b, 0.0));
    }

    #[test]
    fn color_at_pads_outside_stops() {
        let g = red_to_clear(Vec2::zero(), 10.0);
        assert_eq!(g.color_at(-0.5), g.stops[0].color);
        assert_eq!(g.color_at(1.7), Color::transparent());
    }

    #[test]
    fn zero_radius_collapses_to_last_stop() {
        let g = red_to_clear(Vec2::zero(), 0.0);
        assert!(!g.is_valid());
        assert_eq!(g.sample(Vec2::zero()), Color::transparent());
    }

    #[test]
    fn color_at_three_stops_hits_middle() {
        let mid = Color::from_straight(0.0, 1.0, 0.0, 0.4);
        let g = RadialGradient::new(
            Vec2::zero(),
            1.0,
            vec![
                ColorStop::new(0.0, Color::from_straight(1.0, 0.0, 0.0, 0.7)),
                ColorStop::new(0.5, mid),
                ColorStop::new(1.0, Color::transparent()),
            ],
        );
        assert!(g.is_valid());
        assert_eq!(g.color_at(0.5), mid);
    }
}
