use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time since the previous tick in seconds, clamped.
    pub dt: f32,

    /// Unclamped monotonic time since the clock was created.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per window so that multi-window applications do not share
/// timing state. `elapsed` is measured from `origin` and is never rewound;
/// `dt` is clamped so a stalled or minimized window does not produce a huge
/// step for delta-based consumers.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            origin: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.origin),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_unclamped_and_dt_is_clamped() {
        let mut clock = FrameClock::new();
        let origin = clock.origin;

        let ft = clock.tick_at(origin + Duration::from_secs(5));
        assert_eq!(ft.elapsed, Duration::from_secs(5));
        assert_eq!(ft.dt, 0.25);
        assert_eq!(ft.frame_index, 0);

        let ft = clock.tick_at(origin + Duration::from_secs(5));
        assert_eq!(ft.dt, Duration::from_micros(100).as_secs_f32());
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn elapsed_is_non_decreasing() {
        let mut clock = FrameClock::new();
        let origin = clock.origin;
        let a = clock.tick_at(origin + Duration::from_millis(16));
        let b = clock.tick_at(origin + Duration::from_millis(33));
        assert!(b.elapsed >= a.elapsed);
    }
}
