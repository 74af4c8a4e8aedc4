use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_positive, ConfigError};

use super::model::ClockModel;
use super::pendulum::Pendulum;
use super::time::ClockTime;

/// Pendulum-clock scene parameters. Every field has a default, so a JSON
/// document only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Peak swing angle in radians.
    pub amplitude: f32,
    /// Seconds per full swing.
    pub period: f32,
    pub rod_length: f32,
    pub bob_radius: f32,
    pub face_radius: f32,
    pub face_segments: u32,
    pub box_width: f32,
    pub box_height: f32,
    pub box_depth: f32,
    pub start_time: ClockTime,
    /// Whether the pendulum swings as soon as the scene starts.
    pub autostart: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            period: 2.0,
            rod_length: 0.8,
            bob_radius: 0.05,
            face_radius: 0.45,
            face_segments: 32,
            box_width: 1.0,
            box_height: 1.0,
            box_depth: 0.5,
            start_time: ClockTime::new(10, 30, 0),
            autostart: true,
        }
    }
}

impl ClockConfig {
    /// Parse and validate a config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("amplitude", self.amplitude)?;
        require_positive("period", self.period)?;
        require_positive("rod_length", self.rod_length)?;
        require_positive("bob_radius", self.bob_radius)?;
        require_positive("face_radius", self.face_radius)?;
        require_positive("box_width", self.box_width)?;
        require_positive("box_height", self.box_height)?;
        require_positive("box_depth", self.box_depth)?;
        if self.face_segments < 3 {
            return Err(ConfigError::NonPositive {
                field: "face_segments",
                value: self.face_segments as f64,
            });
        }
        Ok(())
    }

    /// Build the time model this config describes.
    pub fn build_model(&self) -> Result<ClockModel, ConfigError> {
        let pendulum = Pendulum::new(self.amplitude, self.period)?;
        let mut model = ClockModel::new(pendulum, self.start_time);
        if self.autostart {
            model.start_pendulum();
        }
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ClockConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ClockConfig::from_json(r#"{ "period": 1.5 }"#).unwrap();
        assert_eq!(config.period, 1.5);
        assert_eq!(config.face_radius, 0.45);
        assert_eq!(config.start_time, ClockTime::new(10, 30, 0));
    }

    #[test]
    fn rejects_zero_period() {
        let err = ClockConfig::from_json(r#"{ "period": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { field: "period", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ClockConfig::from_json("{ period: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn start_time_is_normalized_when_building() {
        let config = ClockConfig::from_json(
            r#"{ "start_time": { "hours": 14, "minutes": 5, "seconds": 0 } }"#,
        )
        .unwrap();
        assert_eq!(config.start_time, ClockTime::new(2, 5, 0));
        let model = config.build_model().unwrap();
        assert_eq!(model.time(), ClockTime::new(2, 5, 0));
        assert!(model.is_running());
    }
}
