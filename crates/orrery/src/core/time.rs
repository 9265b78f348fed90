/// One tick's worth of time, as fed to [`Orrery::tick`](crate::Orrery::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Total simulated seconds since start.
    pub elapsed: f64,
    /// Seconds since the previous tick.
    pub delta: f32,
}

/// Monotonic frame clock for drivers that only know per-frame deltas.
/// Accumulates elapsed time and caps long frames (tab switches, debugger stops)
/// so a single tick never jumps the scene forward by more than `max_delta`.
pub struct FrameClock {
    elapsed: f64,
    max_delta: f32,
}

impl FrameClock {
    /// Default cap: a quarter second per frame.
    pub const DEFAULT_MAX_DELTA: f32 = 0.25;

    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            elapsed: 0.0,
            max_delta: max_delta.max(0.0),
        }
    }

    /// Add frame time. Negative or non-finite frame times count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> Tick {
        let delta = sanitize_delta(frame_dt).min(self.max_delta);
        self.elapsed += delta as f64;
        Tick {
            elapsed: self.elapsed,
            delta,
        }
    }

    /// Total elapsed seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a raw delta into a usable non-negative finite value.
#[inline]
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_elapsed() {
        let mut clock = FrameClock::new();
        clock.advance(1.0 / 60.0);
        let tick = clock.advance(1.0 / 60.0);
        assert!((tick.elapsed - 2.0 / 60.0).abs() < 1e-6);
        assert!((tick.delta - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn caps_long_frames() {
        let mut clock = FrameClock::with_max_delta(0.1);
        let tick = clock.advance(5.0);
        assert_eq!(tick.delta, 0.1);
        assert!((clock.elapsed() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn ignores_negative_and_nan_frames() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        let before = clock.elapsed();
        assert_eq!(clock.advance(-1.0).delta, 0.0);
        assert_eq!(clock.advance(f32::NAN).delta, 0.0);
        assert_eq!(clock.elapsed(), before);
    }
}
