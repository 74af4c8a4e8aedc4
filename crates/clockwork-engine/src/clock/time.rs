use serde::{Deserialize, Serialize};

/// Seconds in one trip of the hour hand around the dial.
pub const SECONDS_PER_CYCLE: i64 = 12 * 3600;

/// Time shown on a 12-hour dial.
///
/// Always normalized: hours 0..12, minutes and seconds 0..60. Deserialized
/// values pass through [`ClockTime::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawClockTime")]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    /// Normalize each field independently with a Euclidean remainder.
    ///
    /// Fields do not carry into each other: `new(0, 75, 0)` is 00:15:00,
    /// and negative input wraps backwards (`new(-1, 0, 0)` is 11:00:00).
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours: hours.rem_euclid(12) as u32,
            minutes: minutes.rem_euclid(60) as u32,
            seconds: seconds.rem_euclid(60) as u32,
        }
    }

    /// Re-normalize a value that may have been built from a struct literal.
    pub fn normalized(self) -> Self {
        Self::new(self.hours as i64, self.minutes as i64, self.seconds as i64)
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64
    }

    /// Decompose a second count, wrapping every 12 hours.
    pub fn from_total_seconds(total: i64) -> Self {
        let total = total.rem_euclid(SECONDS_PER_CYCLE);
        Self {
            hours: (total / 3600) as u32,
            minutes: (total / 60 % 60) as u32,
            seconds: (total % 60) as u32,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawClockTime {
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl From<RawClockTime> for ClockTime {
    fn from(raw: RawClockTime) -> Self {
        Self::new(raw.hours, raw.minutes, raw.seconds)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_seconds_round_trips_every_valid_time() {
        for h in 0..12 {
            for m in 0..60 {
                for s in 0..60 {
                    let t = ClockTime::new(h, m, s);
                    assert_eq!(ClockTime::from_total_seconds(t.total_seconds()), t);
                }
            }
        }
    }

    #[test]
    fn fields_normalize_without_carry() {
        assert_eq!(ClockTime::new(13, 75, 61), ClockTime::new(1, 15, 1));
        assert_eq!(ClockTime::new(-1, -1, -1), ClockTime::new(11, 59, 59));
    }

    #[test]
    fn deserializing_normalizes_out_of_range_fields() {
        let t: ClockTime = serde_json::from_str(r#"{"hours":14,"minutes":75,"seconds":90}"#).unwrap();
        assert_eq!(t, ClockTime::new(2, 15, 30));
        assert_eq!(t.to_string(), "02:15:30");

        let t: ClockTime = serde_json::from_str(r#"{"hours":-1}"#).unwrap();
        assert_eq!(t, ClockTime::new(11, 0, 0));
    }

    #[test]
    fn normalized_fixes_struct_literals() {
        let raw = ClockTime { hours: 14, minutes: 75, seconds: 90 };
        assert_eq!(raw.normalized(), ClockTime::new(2, 15, 30));
    }

    #[test]
    fn from_total_wraps_at_twelve_hours() {
        assert_eq!(ClockTime::from_total_seconds(SECONDS_PER_CYCLE), ClockTime::default());
        assert_eq!(ClockTime::from_total_seconds(-1), ClockTime::new(11, 59, 59));
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(ClockTime::new(10, 3, 7).to_string(), "10:03:07");
    }
}
