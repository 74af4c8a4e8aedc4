use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_positive, ConfigError};

use super::body::OrbitingBody;
use super::system::OrbitalSystem;

/// One body's orbit. Circular orbits set both axes equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParams {
    pub semi_major: f32,
    pub semi_minor: f32,
    /// Radians per second at normal speed.
    pub angular_speed: f32,
    #[serde(default)]
    pub initial_angle: f32,
}

impl OrbitParams {
    pub fn build(&self) -> Result<OrbitingBody, ConfigError> {
        OrbitingBody::new(self.semi_major, self.semi_minor, self.angular_speed, self.initial_angle)
    }
}

/// Orrery parameters. Missing keys fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub earth: OrbitParams,
    /// Orbit around the Earth. Must be circular: eclipse snapping places
    /// the Moon at `semi_major` from the Earth.
    pub moon: OrbitParams,
    pub mars: OrbitParams,
    /// Speed multiplier during normal play.
    pub normal_speed: f32,
    /// Speed multiplier while searching for an eclipse.
    pub search_speed: f32,
    /// Longest frame step the simulation accepts, in seconds.
    pub dt_cap: f32,
    /// Largest angle any body may turn between two alignment tests.
    pub max_substep_angle: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            earth: OrbitParams {
                semi_major: 60.0,
                semi_minor: 58.0,
                angular_speed: 0.2,
                initial_angle: 0.0,
            },
            moon: OrbitParams {
                semi_major: 12.0,
                semi_minor: 12.0,
                angular_speed: 2.6,
                initial_angle: 0.0,
            },
            mars: OrbitParams {
                semi_major: 110.0,
                semi_minor: 104.0,
                angular_speed: 0.106,
                initial_angle: 1.0,
            },
            normal_speed: 1.0,
            search_speed: 10.0,
            dt_cap: 0.1,
            max_substep_angle: 0.01,
        }
    }
}

impl OrbitConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for params in [&self.earth, &self.moon, &self.mars] {
            params.build()?;
        }
        if self.moon.semi_major != self.moon.semi_minor {
            return Err(ConfigError::NotCircular {
                field: "moon",
                major: self.moon.semi_major as f64,
                minor: self.moon.semi_minor as f64,
            });
        }
        require_finite("normal_speed", self.normal_speed)?;
        require_finite("search_speed", self.search_speed)?;
        require_positive("dt_cap", self.dt_cap)?;
        require_positive("max_substep_angle", self.max_substep_angle)?;
        Ok(())
    }

    pub fn build(&self) -> Result<OrbitalSystem, ConfigError> {
        OrbitalSystem::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(OrbitConfig::default().validate().is_ok());
    }

    #[test]
    fn overrides_merge_with_defaults() {
        let config = OrbitConfig::from_json(r#"{ "search_speed": 25.0 }"#).unwrap();
        assert_eq!(config.search_speed, 25.0);
        assert_eq!(config.earth.semi_major, 60.0);
    }

    #[test]
    fn rejects_zero_axis() {
        let json = r#"{ "moon": { "semi_major": 0.0, "semi_minor": 12.0, "angular_speed": 2.6 } }"#;
        assert!(matches!(
            OrbitConfig::from_json(json),
            Err(ConfigError::NonPositive { field: "semi_major", .. })
        ));
    }

    #[test]
    fn rejects_elliptical_moon() {
        let json = r#"{ "moon": { "semi_major": 12.0, "semi_minor": 10.0, "angular_speed": 2.6 } }"#;
        assert!(matches!(
            OrbitConfig::from_json(json),
            Err(ConfigError::NotCircular { field: "moon", .. })
        ));
        let mut config = OrbitConfig::default();
        config.earth.semi_minor = 40.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_cap() {
        let config = OrbitConfig { dt_cap: 0.0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
