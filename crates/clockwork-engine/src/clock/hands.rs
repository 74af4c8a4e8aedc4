use serde::{Deserialize, Serialize};

use super::time::ClockTime;

/// Which of the three hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    /// Clockwise angle from 12 o'clock in degrees.
    pub fn angle_degrees(self, time: ClockTime) -> f32 {
        let h = (time.hours % 12) as f32;
        let m = time.minutes as f32;
        let s = time.seconds as f32;
        match self {
            HandKind::Hour => h * 30.0 + m * 0.5 + s * (0.5 / 60.0),
            HandKind::Minute => m * 6.0 + s * 0.1,
            HandKind::Second => s * 6.0,
        }
    }

    /// Dial angle in radians, offset by -90° so 12 o'clock is 0 at the top.
    pub fn angle(self, time: ClockTime) -> f32 {
        (self.angle_degrees(time) - 90.0).to_radians()
    }

    pub fn length(self) -> f32 {
        match self {
            HandKind::Hour => 0.35,
            HandKind::Minute => 0.45,
            HandKind::Second => 0.40,
        }
    }

    pub fn width(self) -> f32 {
        match self {
            HandKind::Hour => 0.035,
            HandKind::Minute => 0.025,
            HandKind::Second => 0.015,
        }
    }

    pub fn color(self) -> [f32; 3] {
        match self {
            HandKind::Hour => [0.3, 0.3, 0.3],
            HandKind::Minute => [0.25, 0.25, 0.25],
            HandKind::Second => [0.8, 0.1, 0.1],
        }
    }

    /// Stable entity tag for this hand.
    pub fn tag(self) -> &'static str {
        match self {
            HandKind::Hour => "hand_hour",
            HandKind::Minute => "hand_minute",
            HandKind::Second => "hand_second",
        }
    }
}

/// Dial angles of all three hands, in radians (see [`HandKind::angle`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(time: ClockTime) -> Self {
        Self {
            hour: HandKind::Hour.angle(time),
            minute: HandKind::Minute.angle(time),
            second: HandKind::Second.angle(time),
        }
    }

    pub fn get(&self, kind: HandKind) -> f32 {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }

    /// Z rotation for a hand mesh that points along +x at rest.
    ///
    /// Dial angles run clockwise while a positive z rotation turns
    /// counter-clockwise, hence the sign flip.
    pub fn z_rotation(&self, kind: HandKind) -> f32 {
        -self.get(kind)
    }
}
