use glam::Vec3;

use crate::error::{require_finite, require_positive, ConfigError};

/// A body moving along an ellipse centered on its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitingBody {
    /// Current orbital angle in radians. Grows without wrapping.
    pub angle: f32,
    semi_major: f32,
    semi_minor: f32,
    /// Radians per second at a speed multiplier of 1.
    angular_speed: f32,
    initial_angle: f32,
}

impl OrbitingBody {
    pub fn new(
        semi_major: f32,
        semi_minor: f32,
        angular_speed: f32,
        initial_angle: f32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            angle: require_finite("initial_angle", initial_angle)?,
            semi_major: require_positive("semi_major", semi_major)?,
            semi_minor: require_positive("semi_minor", semi_minor)?,
            angular_speed: require_finite("angular_speed", angular_speed)?,
            initial_angle,
        })
    }

    /// Skips validation; for parameters already known to be valid.
    pub(super) fn from_trusted(semi_major: f32, semi_minor: f32, angular_speed: f32, initial_angle: f32) -> Self {
        Self {
            angle: initial_angle,
            semi_major,
            semi_minor,
            angular_speed,
            initial_angle,
        }
    }

    pub fn circular(radius: f32, angular_speed: f32, initial_angle: f32) -> Result<Self, ConfigError> {
        Self::new(radius, radius, angular_speed, initial_angle)
    }

    pub fn semi_major(&self) -> f32 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f32 {
        self.semi_minor
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Offset from the parent at the current angle: `(a cos, 0, b sin)`.
    pub fn offset(&self) -> Vec3 {
        ellipse_position(self.angle, self.semi_major, self.semi_minor)
    }

    /// World position given the parent's world position.
    pub fn position_around(&self, parent: Vec3) -> Vec3 {
        parent + self.offset()
    }

    pub fn reset(&mut self) {
        self.angle = self.initial_angle;
    }
}

/// Point on an origin-centered ellipse in the y = 0 plane.
pub fn ellipse_position(angle: f32, semi_major: f32, semi_minor: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(semi_major * cos, 0.0, semi_minor * sin)
}

/// Moon position: a circle of `radius` around the Earth.
pub fn moon_position(earth: Vec3, angle: f32, radius: f32) -> Vec3 {
    earth + ellipse_position(angle, radius, radius)
}

/// Advance every body by `angular_speed · speed_multiplier · min(dt, dt_cap)`.
///
/// Bodies are independent; negative or non-finite `dt` leaves them alone.
pub fn advance_orbits<'a>(
    bodies: impl IntoIterator<Item = &'a mut OrbitingBody>,
    dt: f32,
    speed_multiplier: f32,
    dt_cap: f32,
) {
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    let dt = dt.min(dt_cap);
    for body in bodies {
        body.angle += body.angular_speed * speed_multiplier * dt;
    }
}
