/// Per-frame delta-time sampler.
///
/// The host measures wall-clock time once per frame and hands the raw
/// delta to the runner. `FrameClock` sanitizes it (negative or NaN deltas
/// become zero, stalls are capped) and keeps running totals.
pub struct FrameClock {
    /// Largest delta passed on to the game in one frame.
    max_dt: f32,
    /// Sanitized delta of the most recent frame.
    dt: f32,
    /// Total sanitized time since start, in seconds.
    elapsed: f64,
    /// Number of frames ticked.
    frame: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: if max_dt.is_finite() && max_dt > 0.0 { max_dt } else { f32::MAX },
            dt: 0.0,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Record one frame's raw delta. Returns the delta the game should see.
    pub fn tick(&mut self, raw_dt: f32) -> f32 {
        let dt = if raw_dt.is_finite() && raw_dt > 0.0 {
            raw_dt.min(self.max_dt)
        } else {
            0.0
        };
        self.dt = dt;
        self.elapsed += dt as f64;
        self.frame += 1;
        dt
    }

    /// Delta of the most recent frame.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
