use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_DISTANCE_RATIO: f64 = 0.05;
pub const MAX_DISTANCE_RATIO: f64 = 0.95;
pub const DEFAULT_DISTANCE_RATIO: f64 = 0.3;

pub const MIN_VELOCITY_THRESHOLD: f64 = 1.0;
pub const MAX_VELOCITY_THRESHOLD: f64 = 10_000.0;
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 500.0;

/// Swipe commit thresholds for the balance carousel.
///
/// A gesture commits when it travels more than `distance_ratio` of the card width or is
/// released faster than `velocity_threshold` px/s.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub distance_ratio: f64,
    pub velocity_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            distance_ratio: DEFAULT_DISTANCE_RATIO,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_DISTANCE_RATIO..=MAX_DISTANCE_RATIO).contains(&self.distance_ratio) {
            return Err(ConfigError::invalid("carousel", format!(
                "carousel.distance_ratio must be {}-{}, got {}",
                MIN_DISTANCE_RATIO, MAX_DISTANCE_RATIO, self.distance_ratio
            )));
        }

        if !(MIN_VELOCITY_THRESHOLD..=MAX_VELOCITY_THRESHOLD).contains(&self.velocity_threshold) {
            return Err(ConfigError::invalid("carousel", format!(
                "carousel.velocity_threshold must be {}-{}, got {}",
                MIN_VELOCITY_THRESHOLD, MAX_VELOCITY_THRESHOLD, self.velocity_threshold
            )));
        }

        Ok(())
    }
}
