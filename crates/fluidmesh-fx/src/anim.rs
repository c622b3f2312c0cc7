//! Time-driven interpolation.
//!
//! Animations are plain values evaluated at an elapsed time:
//! `value(t) = f(t, period, start, end, mode)`. Nothing is stepped or
//! accumulated between frames, so dropped or repeated frames are harmless.

use std::time::Duration;

use fluidmesh_engine::paint::Color;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// `self` at `t = 0`, `other` at `t = 1`.
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, other: f32, t: f32) -> f32 {
        self + (other - self) * t
    }
}

impl Lerp for Color {
    /// Channel-wise in straight alpha, no gamma.
    #[inline]
    fn lerp(self, other: Color, t: f32) -> Color {
        Color::lerp_straight(self, other, t)
    }
}

/// Maps linear progress `p ∈ [0, 1]` to eased progress with the same endpoints.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Material standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`: quick start,
    /// long settle.
    FastOutSlowIn,
}

impl Easing {
    /// Eased progress; exact at 0 and 1, clamped outside.
    pub fn transform(self, p: f32) -> f32 {
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => p,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, p),
        }
    }
}

/// `y` on the unit cubic Bézier through `(x1, y1)`, `(x2, y2)` at abscissa `x`.
///
/// `x(t)` is monotonic for control x-coordinates in `[0, 1]`, so bisection
/// on `t` converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let curve = |a: f32, b: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut t = x;
    for _ in 0..32 {
        let v = curve(x1, x2, t);
        if (v - x).abs() < 1e-6 {
            break;
        }
        if v < x { lo = t } else { hi = t }
        t = 0.5 * (lo + hi);
    }
    curve(y1, y2, t)
}

/// What happens when a period ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RepeatMode {
    /// Jump back to `start`: a sawtooth.
    Restart,
    /// Play the period backwards in time: the odd half mirrors the even
    /// half, giving a `2 × period` cycle.
    Reverse,
}

/// A value that loops linearly between `start` and `end` forever.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Periodic<T> {
    pub start: T,
    pub end: T,
    pub period: Duration,
    pub mode: RepeatMode,
    pub easing: Easing,
}

impl<T: Lerp> Periodic<T> {
    pub const fn new(start: T, end: T, period: Duration, mode: RepeatMode) -> Self {
        Self { start, end, period, mode, easing: Easing::Linear }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn restart(start: T, end: T, period: Duration) -> Self {
        Self::new(start, end, period, RepeatMode::Restart)
    }

    pub const fn reverse(start: T, end: T, period: Duration) -> Self {
        Self::new(start, end, period, RepeatMode::Reverse)
    }

    /// Progress through the current period in `[0, 1)` and the period index.
    ///
    /// Computed on integer nanoseconds so period boundaries land exactly on 0.
    /// A zero period reports `(0.0, 0)`.
    pub fn phase(&self, elapsed: Duration) -> (f32, u128) {
        let period = self.period.as_nanos();
        if period == 0 {
            return (0.0, 0);
        }
        let t = elapsed.as_nanos();
        let cycle = t / period;
        let progress = ((t % period) as f64 / period as f64) as f32;
        (progress, cycle)
    }

    /// Value at `elapsed` time since the animation started.
    pub fn value_at(&self, elapsed: Duration) -> T {
        let (p, cycle) = self.phase(elapsed);
        let ease = |p: f32| self.easing.transform(p);
        match self.mode {
            RepeatMode::Reverse if cycle % 2 == 1 => {
                // Time-reversed: at p the value equals the forward value at 1 - p.
                self.end.lerp(self.start, 1.0 - ease(1.0 - p))
            }
            RepeatMode::Restart | RepeatMode::Reverse => self.start.lerp(self.end, ease(p)),
        }
    }

    /// Time after which the output sequence repeats.
    pub fn cycle_length(&self) -> Duration {
        match self.mode {
            RepeatMode::Restart => self.period,
            RepeatMode::Reverse => self.period.saturating_mul(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }
    fn close(a: f32, b: f32) -> bool { (a - b).abs() < 1e-3 }

    // ── restart ───────────────────────────────────────────────────────────

    #[test]
    fn restart_ramps_and_wraps_to_start() {
        let a = Periodic::restart(0.0f32, 360.0, ms(30_000));
        assert_eq!(a.value_at(ms(0)), 0.0);
        assert!(close(a.value_at(ms(15_000)), 180.0));
        assert!(a.value_at(ms(29_999)) > 359.9);
        assert_eq!(a.value_at(ms(30_000)), 0.0);
        assert!(close(a.value_at(ms(45_000)), 180.0));
    }

    #[test]
    fn restart_descending_ramp() {
        let a = Periodic::restart(360.0f32, 0.0, ms(25_000));
        assert_eq!(a.value_at(ms(0)), 360.0);
        assert!(close(a.value_at(ms(12_500)), 180.0));
        assert!(a.value_at(ms(24_999)) < 0.1);
    }

    #[test]
    fn restart_is_periodic() {
        let a = Periodic::restart(0.0f32, 360.0, ms(30_000));
        for t in [1u64, 777, 12_345, 29_000] {
            assert_eq!(a.value_at(ms(t)), a.value_at(ms(t + 30_000)));
            assert_eq!(a.value_at(ms(t)), a.value_at(ms(t + 90_000)));
        }
    }

    // ── reverse ───────────────────────────────────────────────────────────

    #[test]
    fn reverse_ping_pongs() {
        let a = Periodic::reverse(0.0f32, 1.0, ms(8_000));
        assert_eq!(a.value_at(ms(0)), 0.0);
        assert!(close(a.value_at(ms(4_000)), 0.5));
        assert_eq!(a.value_at(ms(8_000)), 1.0);
        assert!(close(a.value_at(ms(12_000)), 0.5));
        assert_eq!(a.value_at(ms(16_000)), 0.0);
    }

    #[test]
    fn reverse_is_continuous_at_turnaround() {
        let a = Periodic::reverse(0.0f32, 1.0, ms(8_000));
        let before = a.value_at(ms(7_999));
        let after = a.value_at(ms(8_001));
        assert!((before - after).abs() < 1e-3);
    }

    #[test]
    fn reverse_repeats_every_two_periods() {
        let a = Periodic::reverse(0.0f32, 1.0, ms(12_000));
        assert_eq!(a.cycle_length(), ms(24_000));
        for t in [0u64, 3_000, 11_999, 17_500] {
            assert_eq!(a.value_at(ms(t)), a.value_at(ms(t + 24_000)));
        }
    }

    #[test]
    fn reverse_color_stays_between_endpoints() {
        let from = Color::from_argb_u32(0xFF00FF66);
        let to = Color::from_argb_u32(0xFFFF8A00);
        let a = Periodic::reverse(from, to, ms(10_000));
        for t in (0..40_000u64).step_by(333) {
            let c = a.value_at(ms(t));
            for (v, lo, hi) in [(c.r, from.r, to.r), (c.g, from.g, to.g), (c.b, from.b, to.b)] {
                assert!(v >= lo.min(hi) - 1e-6 && v <= lo.max(hi) + 1e-6);
            }
            assert!(close(c.a, 1.0));
        }
    }

    // ── easing ────────────────────────────────────────────────────────────

    #[test]
    fn easing_keeps_endpoints() {
        for e in [Easing::Linear, Easing::FastOutSlowIn] {
            assert_eq!(e.transform(0.0), 0.0);
            assert_eq!(e.transform(1.0), 1.0);
            assert_eq!(e.transform(-0.3), 0.0);
            assert_eq!(e.transform(1.3), 1.0);
        }
    }

    #[test]
    fn fast_out_slow_in_matches_material_curve() {
        let e = Easing::FastOutSlowIn;
        assert!(close(e.transform(0.25), 0.2366));
        assert!(close(e.transform(0.5), 0.7756));
        assert!(close(e.transform(0.75), 0.9594));

        let mut prev = 0.0;
        for i in 1..=100 {
            let y = e.transform(i as f32 / 100.0);
            assert!(y >= prev, "not monotonic at {i}");
            prev = y;
        }
    }

    #[test]
    fn eased_reverse_mirrors_around_turnaround() {
        let a = Periodic::reverse(0.0f32, 1.0, ms(8_000)).with_easing(Easing::FastOutSlowIn);
        assert_eq!(a.value_at(ms(0)), 0.0);
        assert_eq!(a.value_at(ms(8_000)), 1.0);
        assert_eq!(a.value_at(ms(16_000)), 0.0);
        for d in [500u64, 2_000, 4_000, 7_000] {
            assert!(close(a.value_at(ms(8_000 - d)), a.value_at(ms(8_000 + d))), "d = {d}");
        }
        // Eased midpoint of the forward leg sits past the linear one.
        assert!(a.value_at(ms(4_000)) > 0.75);
    }

    #[test]
    fn linear_is_the_default() {
        let a = Periodic::restart(0.0f32, 1.0, ms(1_000));
        assert_eq!(a.easing, Easing::Linear);
    }

    // ── degenerate ────────────────────────────────────────────────────────

    #[test]
    fn zero_period_holds_start() {
        let a = Periodic::restart(5.0f32, 10.0, Duration::ZERO);
        assert_eq!(a.value_at(ms(1_000)), 5.0);
        assert_eq!(a.phase(ms(1_000)), (0.0, 0));
    }
}
