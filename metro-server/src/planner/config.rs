//! Route configuration for the planner.
//!
//! Per-hop costs, the transfer penalty and the fare table are deployment
//! settings, so they live here rather than in the search code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::fare::{FareError, FareTable};

/// Error from loading or validating route configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A cost parameter is negative or not finite
    #[error("invalid {field}: {value} (must be finite and non-negative)")]
    InvalidValue { field: &'static str, value: f64 },

    /// The fare table is inconsistent
    #[error("invalid fare table: {0}")]
    Fares(#[from] FareError),

    /// Failed to read the configuration file
    #[error("failed to read route config: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

/// Configuration parameters for route computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Minutes to travel between adjacent stations.
    pub minutes_per_station: f64,

    /// Extra minutes charged for each change of line.
    pub transfer_penalty_minutes: f64,

    /// Distance between adjacent stations, used for fares.
    pub distance_per_station: f64,

    /// Fare charged for a total distance.
    pub fares: FareTable,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        minutes_per_station: f64,
        transfer_penalty_minutes: f64,
        distance_per_station: f64,
        fares: FareTable,
    ) -> Self {
        Self {
            minutes_per_station,
            transfer_penalty_minutes,
            distance_per_station,
            fares,
        }
    }

    /// Set the per-hop travel time.
    pub fn with_minutes_per_station(mut self, minutes: f64) -> Self {
        self.minutes_per_station = minutes;
        self
    }

    /// Set the line-change penalty.
    pub fn with_transfer_penalty(mut self, minutes: f64) -> Self {
        self.transfer_penalty_minutes = minutes;
        self
    }

    /// Set the per-hop distance.
    pub fn with_distance_per_station(mut self, distance: f64) -> Self {
        self.distance_per_station = distance;
        self
    }

    /// Set the fare table.
    pub fn with_fares(mut self, fares: FareTable) -> Self {
        self.fares = fares;
        self
    }

    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: RouteConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Json {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("minutes_per_station", self.minutes_per_station),
            ("transfer_penalty_minutes", self.transfer_penalty_minutes),
            ("distance_per_station", self.distance_per_station),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        self.fares.validate()?;
        Ok(())
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            minutes_per_station: 2.0,
            transfer_penalty_minutes: 5.0,
            distance_per_station: 1.5,
            fares: FareTable::default(),
        }
    }
}
