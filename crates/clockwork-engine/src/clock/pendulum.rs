use std::f64::consts::TAU;

use crate::error::{require_finite, require_positive, ConfigError};

/// Undamped pendulum oscillation.
///
/// Only the period matters for timekeeping; rod length and bob size are
/// geometry and live in [`ClockConfig`](super::ClockConfig).
#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    amplitude: f32,
    period: f32,
    /// Seconds accumulated while running.
    elapsed: f64,
    running: bool,
}

/// Half a radian of swing, two seconds per period, stopped.
impl Default for Pendulum {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            period: 2.0,
            elapsed: 0.0,
            running: false,
        }
    }
}

impl Pendulum {
    /// A stopped pendulum at rest position. `period` must be finite and > 0.
    pub fn new(amplitude: f32, period: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            amplitude: require_finite("amplitude", amplitude)?,
            period: require_positive("period", period)?,
            elapsed: 0.0,
            running: false,
        })
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_period(&mut self, period: f32) -> Result<(), ConfigError> {
        self.period = require_positive("period", period)?;
        Ok(())
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Accumulate `dt` while running. Negative or non-finite steps are ignored.
    pub fn update(&mut self, dt: f32) {
        if self.running && dt.is_finite() && dt > 0.0 {
            self.elapsed += dt as f64;
        }
    }

    /// Current swing angle in radians.
    pub fn swing_angle(&self) -> f32 {
        self.swing_angle_at(self.elapsed)
    }

    /// Swing angle after `t` seconds of running.
    pub fn swing_angle_at(&self, t: f64) -> f32 {
        let phase = TAU * t / self.period as f64;
        self.amplitude * phase.sin() as f32
    }

    /// Full periods completed since `since` (elapsed seconds).
    pub fn cycles_since(&self, since: f64) -> f64 {
        (self.elapsed - since) / self.period as f64
    }
}
