use core_types::{DIMENSIONS, Dimension};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DOMINANT_THRESHOLD: f64 = 3.5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid profile config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("weight for {dimension} must be finite and non-negative, got {value}")]
    InvalidWeight { dimension: Dimension, value: f64 },

    #[error("dominant threshold must be finite, got {0}")]
    InvalidThreshold(f64),
}

/// Tunables for [`crate::PersonalityAggregator`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Multiplier applied to each averaged dimension before clamping.
    pub dimension_weights: [f64; DIMENSIONS],
    pub dominant_threshold: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            dimension_weights: [1.0; DIMENSIONS],
            dominant_threshold: DEFAULT_DOMINANT_THRESHOLD,
        }
    }
}

impl ProfileConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (dimension, value) in Dimension::ALL.iter().zip(self.dimension_weights) {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    dimension: *dimension,
                    value,
                });
            }
        }
        if !self.dominant_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.dominant_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ProfileConfig};

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ProfileConfig::from_json_str(r#"{"dominant_threshold": 4.0}"#).expect("config");
        assert_eq!(config.dominant_threshold, 4.0);
        assert_eq!(config.dimension_weights, [1.0; 5]);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = ProfileConfig::from_json_str(r#"{"dimension_weights": [1, 1, -1, 1, 1]}"#)
            .expect_err("negative weight");
        assert!(matches!(err, ConfigError::InvalidWeight { value, .. } if value == -1.0));
        assert!(err.to_string().contains("Luxury & Comfort"));
    }

    #[test]
    fn wrong_weight_count_is_a_parse_error() {
        let err = ProfileConfig::from_json_str(r#"{"dimension_weights": [1, 1]}"#)
            .expect_err("short weights");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
