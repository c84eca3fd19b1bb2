//! Hazard motion model
//!
//! Linear hazards oscillate along one axis around their anchor. Circular
//! hazards orbit their anchor at a fixed radius.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use crate::{normalize_angle, polar_to_cartesian};

/// Axis a linear hazard travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Initial travel direction of a linear hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Toward +x / +y (right / down)
    #[default]
    Positive,
    /// Toward -x / -y (left / up)
    Negative,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

/// Authored motion parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HazardMotion {
    /// Oscillate along `axis`, reversing once `range` pixels from the anchor
    Linear {
        axis: Axis,
        range: f32,
        #[serde(default)]
        direction: Direction,
    },
    /// Orbit the anchor at `radius`, starting at `initial_angle` (radians)
    Circular { radius: f32, initial_angle: f32 },
}

/// Authored, immutable hazard description
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardConfig {
    /// Start position (linear) or pivot (circular)
    pub anchor: Vec2,
    /// Pixels per tick (linear) or radians per tick (circular, sign sets rotation sense)
    pub speed: f32,
    pub motion: HazardMotion,
}

impl HazardConfig {
    pub fn linear(anchor: Vec2, axis: Axis, speed: f32, range: f32, direction: Direction) -> Self {
        Self {
            anchor,
            speed,
            motion: HazardMotion::Linear {
                axis,
                range,
                direction,
            },
        }
    }

    pub fn circular(anchor: Vec2, speed: f32, radius: f32, initial_angle: f32) -> Self {
        Self {
            anchor,
            speed,
            motion: HazardMotion::Circular {
                radius,
                initial_angle,
            },
        }
    }
}

/// Live motion fields, one variant per hazard kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LiveMotion {
    Linear { axis: Axis, range: f32, dir: f32 },
    Circular { radius: f32, angle: f32 },
}

/// Per-attempt hazard state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardState {
    pub anchor: Vec2,
    pub speed: f32,
    /// Current world position
    pub pos: Vec2,
    pub motion: LiveMotion,
}

impl HazardState {
    /// Fresh live state derived from an authored config
    pub fn from_config(config: &HazardConfig) -> Self {
        match config.motion {
            HazardMotion::Linear {
                axis,
                range,
                direction,
            } => Self {
                anchor: config.anchor,
                speed: config.speed,
                pos: config.anchor,
                motion: LiveMotion::Linear {
                    axis,
                    range,
                    dir: direction.sign(),
                },
            },
            HazardMotion::Circular {
                radius,
                initial_angle,
            } => Self {
                anchor: config.anchor,
                speed: config.speed,
                pos: config.anchor + polar_to_cartesian(radius, initial_angle),
                motion: LiveMotion::Circular {
                    radius,
                    angle: initial_angle,
                },
            },
        }
    }

    /// Advance one tick
    ///
    /// Linear hazards flip direction for the following tick once they are at
    /// least `range` from the anchor, so a position may overshoot by up to one
    /// step.
    pub fn advance(&mut self) {
        match &mut self.motion {
            LiveMotion::Linear { axis, range, dir } => {
                let dist = match axis {
                    Axis::Horizontal => {
                        self.pos.x += self.speed * *dir;
                        self.pos.x - self.anchor.x
                    }
                    Axis::Vertical => {
                        self.pos.y += self.speed * *dir;
                        self.pos.y - self.anchor.y
                    }
                };
                if dist.abs() >= *range {
                    *dir = -*dir;
                }
            }
            LiveMotion::Circular { radius, angle } => {
                *angle = normalize_angle(*angle + self.speed);
                self.pos = self.anchor + polar_to_cartesian(*radius, *angle);
            }
        }
    }

    /// Distance from the anchor along the travel axis (linear only)
    pub fn displacement(&self) -> Option<f32> {
        match self.motion {
            LiveMotion::Linear {
                axis: Axis::Horizontal,
                ..
            } => Some(self.pos.x - self.anchor.x),
            LiveMotion::Linear {
                axis: Axis::Vertical,
                ..
            } => Some(self.pos.y - self.anchor.y),
            LiveMotion::Circular { .. } => None,
        }
    }

    pub fn circle(&self, radius: f32) -> Circle {
        Circle::new(self.pos, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_linear_vertical_reverses_at_range() {
        let config = HazardConfig::linear(
            Vec2::new(280.0, 250.0),
            Axis::Vertical,
            4.0,
            60.0,
            Direction::Positive,
        );
        let mut hazard = HazardState::from_config(&config);

        // 15 steps of 4px reach exactly 60px
        for _ in 0..15 {
            hazard.advance();
        }
        assert_eq!(hazard.pos, Vec2::new(280.0, 310.0));
        assert!(matches!(hazard.motion, LiveMotion::Linear { dir, .. } if dir == -1.0));

        hazard.advance();
        assert_eq!(hazard.pos.y, 306.0);
        assert_eq!(hazard.pos.x, 280.0);
    }

    #[test]
    fn test_linear_horizontal_overshoots_by_less_than_one_step() {
        // 120 is not a multiple of 7, so the turn happens past the range
        let config = HazardConfig::linear(
            Vec2::new(450.0, 350.0),
            Axis::Horizontal,
            7.0,
            120.0,
            Direction::Negative,
        );
        let mut hazard = HazardState::from_config(&config);
        let mut max_dist: f32 = 0.0;
        for _ in 0..200 {
            hazard.advance();
            assert_eq!(hazard.pos.y, 350.0);
            max_dist = max_dist.max(hazard.displacement().unwrap().abs());
        }
        assert_eq!(max_dist, 126.0);
    }

    #[test]
    fn test_circular_initial_position_on_orbit() {
        let config = HazardConfig::circular(Vec2::new(400.0, 225.0), 0.02, 50.0, PI / 2.0);
        let hazard = HazardState::from_config(&config);
        assert!((hazard.pos.x - 400.0).abs() < 1e-3);
        assert!((hazard.pos.y - 275.0).abs() < 1e-3);
    }

    #[test]
    fn test_circular_negative_speed_rotates_backwards() {
        let config = HazardConfig::circular(Vec2::ZERO, -PI / 2.0, 10.0, 0.0);
        let mut hazard = HazardState::from_config(&config);
        hazard.advance();
        assert!(hazard.pos.x.abs() < 1e-4);
        assert!((hazard.pos.y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_circular_stays_on_orbit_after_many_ticks() {
        let config = HazardConfig::circular(Vec2::new(100.0, 100.0), 0.08, 20.0, PI);
        let mut hazard = HazardState::from_config(&config);
        for _ in 0..10_000 {
            hazard.advance();
        }
        let r = hazard.pos.distance(Vec2::new(100.0, 100.0));
        assert!((r - 20.0).abs() < 1e-3);
        if let LiveMotion::Circular { angle, .. } = hazard.motion {
            assert!((-PI..PI).contains(&angle));
        }
    }

    proptest! {
        #[test]
        fn prop_linear_displacement_bounded(
            speed in 0.5f32..15.0,
            range in 0.0f32..200.0,
            positive in any::<bool>(),
            vertical in any::<bool>(),
            ticks in 1usize..2000,
        ) {
            let direction = if positive { Direction::Positive } else { Direction::Negative };
            let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
            let config = HazardConfig::linear(Vec2::new(300.0, 200.0), axis, speed, range, direction);
            let mut hazard = HazardState::from_config(&config);
            for _ in 0..ticks {
                hazard.advance();
                let dist = hazard.displacement().unwrap().abs();
                prop_assert!(dist <= range + speed + 1e-2, "dist {} range {} speed {}", dist, range, speed);
            }
        }
    }
}
