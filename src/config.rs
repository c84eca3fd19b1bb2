//! Simulation tuning
//!
//! Defaults reproduce the authored game. A host may override any field from
//! JSON; omitted fields keep their default.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tuning values read by the tick function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Player square side length (pixels)
    pub player_size: f32,
    /// Player movement per tick per held axis (pixels)
    pub player_speed: f32,
    /// Collision radius of every hazard
    pub hazard_radius: f32,
    /// Collision radius of every coin
    pub coin_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            hazard_radius: HAZARD_RADIUS,
            coin_radius: COIN_RADIUS,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("player_size", self.player_size, self.player_size > 0.0),
            ("player_speed", self.player_speed, self.player_speed >= 0.0),
            ("hazard_radius", self.hazard_radius, self.hazard_radius >= 0.0),
            ("coin_radius", self.coin_radius, self.coin_radius >= 0.0),
        ];
        for (name, value, ok) in checks {
            if !value.is_finite() || !ok {
                return Err(ConfigError::InvalidSimConfig(format!("{name} = {value}")));
            }
        }
        Ok(())
    }
}
