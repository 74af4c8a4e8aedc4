use log::debug;

use crate::error::ConfigError;

use super::hands::HandAngles;
use super::pendulum::Pendulum;
use super::time::ClockTime;

/// Clock seconds that pass per full pendulum period.
///
/// Fixed, independent of the configured period: a 1.5 s pendulum makes
/// the clock run fast.
pub const CLOCK_SECONDS_PER_PERIOD: f64 = 2.0;

/// Guards `floor` against a cycle count like 0.9999999 after many small steps.
const CYCLE_EPSILON: f64 = 1e-9;

/// Derives the displayed time from the pendulum.
///
/// `set_time` records a baseline (pendulum elapsed, total seconds); every
/// `update` recomputes the time from that baseline, so rounding never
/// accumulates across frames.
#[derive(Debug, Clone)]
pub struct ClockModel {
    pendulum: Pendulum,
    time: ClockTime,
    angles: HandAngles,
    baseline_elapsed: f64,
    baseline_seconds: i64,
}

impl ClockModel {
    /// `time` is normalized on the way in.
    pub fn new(pendulum: Pendulum, time: ClockTime) -> Self {
        let time = time.normalized();
        Self {
            baseline_elapsed: pendulum.elapsed(),
            pendulum,
            time,
            angles: HandAngles::from_time(time),
            baseline_seconds: time.total_seconds(),
        }
    }

    /// Set the displayed time. Inputs are normalized like [`ClockTime::new`].
    pub fn set_time(&mut self, hours: i64, minutes: i64, seconds: i64) {
        self.time = ClockTime::new(hours, minutes, seconds);
        self.angles = HandAngles::from_time(self.time);
        self.rebaseline();
        debug!("clock set to {}", self.time);
    }

    /// Change the pendulum period, keeping the displayed time.
    pub fn set_period(&mut self, period: f32) -> Result<(), ConfigError> {
        self.pendulum.set_period(period)?;
        self.rebaseline();
        Ok(())
    }

    pub fn start_pendulum(&mut self) {
        self.pendulum.start();
    }

    pub fn stop_pendulum(&mut self) {
        self.pendulum.stop();
    }

    pub fn toggle_pendulum(&mut self) {
        if self.pendulum.is_running() {
            self.stop_pendulum();
        } else {
            self.start_pendulum();
        }
    }

    /// Advance by `dt`. Returns `true` when the displayed time changed.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.pendulum.is_running() {
            return false;
        }
        self.pendulum.update(dt);
        let cycles = self.pendulum.cycles_since(self.baseline_elapsed);
        let seconds = (cycles * CLOCK_SECONDS_PER_PERIOD + CYCLE_EPSILON).floor() as i64;
        let time = ClockTime::from_total_seconds(self.baseline_seconds + seconds);
        if time == self.time {
            return false;
        }
        self.time = time;
        self.angles = HandAngles::from_time(time);
        true
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn hand_angles(&self) -> HandAngles {
        self.angles
    }

    pub fn swing_angle(&self) -> f32 {
        self.pendulum.swing_angle()
    }

    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    pub fn is_running(&self) -> bool {
        self.pendulum.is_running()
    }

    fn rebaseline(&mut self) {
        self.baseline_elapsed = self.pendulum.elapsed();
        self.baseline_seconds = self.time.total_seconds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_clock(period: f32) -> ClockModel {
        let mut clock = ClockModel::new(Pendulum::new(0.5, period).unwrap(), ClockTime::default());
        clock.start_pendulum();
        clock
    }

    #[test]
    fn one_period_adds_two_seconds() {
        let mut clock = running_clock(2.0);
        clock.set_time(10, 30, 0);
        for _ in 0..120 {
            clock.update(2.0 / 120.0);
        }
        assert_eq!(clock.time(), ClockTime::new(10, 30, 2));
    }

    #[test]
    fn half_period_adds_one_second() {
        let mut clock = running_clock(2.0);
        clock.set_time(10, 30, 0);
        assert!(!clock.update(0.9));
        assert!(clock.update(0.2));
        assert_eq!(clock.time(), ClockTime::new(10, 30, 1));
    }

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut clock = running_clock(2.0);
        clock.set_time(3, 0, 0);
        clock.stop_pendulum();
        assert!(!clock.update(10.0));
        assert_eq!(clock.time(), ClockTime::new(3, 0, 0));
        assert_eq!(clock.pendulum().elapsed(), 0.0);
    }

    #[test]
    fn angles_only_change_with_time() {
        let mut clock = running_clock(2.0);
        clock.set_time(1, 2, 3);
        let before = clock.hand_angles();
        assert!(!clock.update(0.2));
        assert_eq!(clock.hand_angles(), before);
        assert!(clock.update(0.9));
        assert_ne!(clock.hand_angles(), before);
        assert_eq!(clock.hand_angles(), HandAngles::from_time(clock.time()));
    }

    #[test]
    fn wraps_past_twelve() {
        let mut clock = running_clock(2.0);
        clock.set_time(11, 59, 59);
        clock.update(1.0);
        assert_eq!(clock.time(), ClockTime::new(0, 0, 0));
    }

    #[test]
    fn period_change_does_not_jump_the_time() {
        let mut clock = running_clock(2.0);
        clock.set_time(6, 0, 0);
        clock.update(1.5);
        let shown = clock.time();
        clock.set_period(1.0).unwrap();
        assert_eq!(clock.time(), shown);
        clock.update(0.5);
        assert_eq!(clock.time(), ClockTime::new(6, 0, 2));
        assert!(clock.set_period(0.0).is_err());
    }

    #[test]
    fn new_normalizes_the_start_time() {
        let raw = ClockTime { hours: 14, minutes: 75, seconds: 90 };
        let mut clock = ClockModel::new(Pendulum::new(0.5, 2.0).unwrap(), raw);
        assert_eq!(clock.time(), ClockTime::new(2, 15, 30));
        assert_eq!(clock.hand_angles(), HandAngles::from_time(ClockTime::new(2, 15, 30)));
        clock.start_pendulum();
        clock.update(1.0);
        assert_eq!(clock.time(), ClockTime::new(2, 15, 31));
    }

    #[test]
    fn toggle_flips_running() {
        let mut clock = running_clock(2.0);
        clock.toggle_pendulum();
        assert!(!clock.is_running());
        clock.toggle_pendulum();
        assert!(clock.is_running());
    }
}
