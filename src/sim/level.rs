//! Static level description
//!
//! A `LevelData` is authored once and never mutated. Each attempt derives its
//! live state from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, rect_overlap};
use super::hazard::{HazardConfig, HazardMotion};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub id: u32,
    pub start_zone: Rect,
    /// Exit zone, active once every coin is collected
    pub end_zone: Rect,
    /// Impassable regions
    pub walls: Vec<Rect>,
    /// Coin positions (order is stable for indexed removal)
    #[serde(default)]
    pub coins: Vec<Vec2>,
    #[serde(default)]
    pub hazards: Vec<HazardConfig>,
    /// Top-left corner of the player on every reset
    pub spawn_point: Vec2,
    /// Outer play-field extent; the player may not leave it
    pub bounds: Rect,
}

impl LevelData {
    /// Check authored geometry and hazard parameters
    ///
    /// `player_size` is needed to check that the spawn square is clear of
    /// walls and inside the bounds.
    pub fn validate(&self, player_size: f32) -> Result<(), ConfigError> {
        self.check_rect("start zone", &self.start_zone)?;
        self.check_rect("end zone", &self.end_zone)?;
        self.check_rect("bounds", &self.bounds)?;
        for (i, wall) in self.walls.iter().enumerate() {
            self.check_rect(&format!("wall {i}"), wall)?;
        }

        for (index, coin) in self.coins.iter().enumerate() {
            if !coin.is_finite() {
                return Err(ConfigError::InvalidCoin {
                    level: self.id,
                    index,
                });
            }
        }

        for (index, hazard) in self.hazards.iter().enumerate() {
            self.check_hazard(index, hazard)?;
        }

        let spawn = Rect::square(self.spawn_point, player_size);
        let invalid_spawn = |reason| ConfigError::InvalidSpawn {
            level: self.id,
            x: self.spawn_point.x,
            y: self.spawn_point.y,
            reason,
        };
        if !self.spawn_point.is_finite() || !self.bounds.contains_rect(&spawn) {
            return Err(invalid_spawn("is outside the level bounds"));
        }
        if self.walls.iter().any(|wall| rect_overlap(&spawn, wall)) {
            return Err(invalid_spawn("overlaps a wall"));
        }

        Ok(())
    }

    fn check_rect(&self, part: &str, rect: &Rect) -> Result<(), ConfigError> {
        if rect.has_valid_size() {
            Ok(())
        } else {
            Err(ConfigError::InvalidRect {
                level: self.id,
                part: part.to_string(),
                w: rect.w,
                h: rect.h,
            })
        }
    }

    fn check_hazard(&self, index: usize, hazard: &HazardConfig) -> Result<(), ConfigError> {
        let invalid = |field, value| ConfigError::InvalidHazard {
            level: self.id,
            index,
            field,
            value,
        };
        if !hazard.anchor.is_finite() {
            return Err(invalid("anchor", f32::NAN));
        }
        if !hazard.speed.is_finite() {
            return Err(invalid("speed", hazard.speed));
        }
        match hazard.motion {
            HazardMotion::Linear { range, .. } => {
                if !range.is_finite() || range < 0.0 {
                    return Err(invalid("range", range));
                }
            }
            HazardMotion::Circular {
                radius,
                initial_angle,
            } => {
                if !radius.is_finite() || radius < 0.0 {
                    return Err(invalid("rotation radius", radius));
                }
                if !initial_angle.is_finite() {
                    return Err(invalid("initial angle", initial_angle));
                }
            }
        }
        Ok(())
    }
}
