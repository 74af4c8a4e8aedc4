use thiserror::Error;

/// Rejected scene configuration.
///
/// Raised at the boundary (constructors, setters, config loading) so that
/// nothing downstream ever divides by a zero period or radius.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero or negative.
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    /// A value was NaN or infinite.
    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    /// An orbit that must be circular has unequal axes.
    #[error("{field} orbit must be circular (semi_major {major} != semi_minor {minor})")]
    NotCircular { field: &'static str, major: f64, minor: f64 },

    /// The JSON document could not be parsed.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Check that `value` is finite and strictly positive.
pub fn require_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value: value as f64 });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value: value as f64 });
    }
    Ok(value)
}

/// Check that `value` is finite (any sign).
pub fn require_finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value: value as f64 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass_through() {
        assert_eq!(require_positive("period", 2.0).unwrap(), 2.0);
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert!(matches!(
            require_positive("period", 0.0),
            Err(ConfigError::NonPositive { field: "period", .. })
        ));
        assert!(require_positive("radius", -1.0).is_err());
    }

    #[test]
    fn nan_is_rejected_as_not_finite() {
        assert!(matches!(
            require_positive("period", f32::NAN),
            Err(ConfigError::NotFinite { .. })
        ));
        assert!(require_finite("speed", f32::INFINITY).is_err());
        assert_eq!(require_finite("speed", -3.0).unwrap(), -3.0);
    }

    #[test]
    fn circular_message_shows_both_axes() {
        let err = ConfigError::NotCircular { field: "moon", major: 12.0, minor: 10.0 };
        assert_eq!(
            err.to_string(),
            "moon orbit must be circular (semi_major 12 != semi_minor 10)"
        );
    }

    #[test]
    fn message_names_the_field() {
        let err = require_positive("semi_major", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "semi_major must be > 0 (got 0)");
    }
}
