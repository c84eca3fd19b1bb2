//! Live attempt state
//!
//! Everything the tick mutates lives here. It is rebuilt from the level on
//! every reset; there is no partial undo.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Rect};
use super::hazard::HazardState;
use super::level::LevelData;

/// One uninterrupted try at a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptState {
    /// Top-left corner of the player square
    pub(crate) player: Vec2,
    /// Live hazards, in authored order
    pub(crate) hazards: Vec<HazardState>,
    /// Coins not yet collected, in authored order
    pub(crate) coins: Vec<Vec2>,
}

impl AttemptState {
    /// Fresh attempt at `level`
    pub fn new(level: &LevelData) -> Self {
        Self {
            player: level.spawn_point,
            hazards: level.hazards.iter().map(HazardState::from_config).collect(),
            coins: level.coins.clone(),
        }
    }

    /// Discard all progress and rebuild from `level`
    pub fn reset(&mut self, level: &LevelData) {
        *self = Self::new(level);
    }

    pub fn player_pos(&self) -> Vec2 {
        self.player
    }

    pub fn player_rect(&self, size: f32) -> Rect {
        Rect::square(self.player, size)
    }

    pub fn hazards(&self) -> &[HazardState] {
        &self.hazards
    }

    pub fn hazard_circles(&self, radius: f32) -> impl Iterator<Item = Circle> + '_ {
        self.hazards.iter().map(move |h| h.circle(radius))
    }

    pub fn remaining_coins(&self) -> &[Vec2] {
        &self.coins
    }

    pub fn all_coins_collected(&self) -> bool {
        self.coins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels;

    #[test]
    fn test_new_attempt_matches_level() {
        let table = levels::builtin();
        let level = &table[3];
        let attempt = AttemptState::new(level);
        assert_eq!(attempt.player_pos(), level.spawn_point);
        assert_eq!(attempt.hazards().len(), level.hazards.len());
        assert_eq!(attempt.remaining_coins(), level.coins.as_slice());
        assert!(!attempt.all_coins_collected());
    }

    #[test]
    fn test_reset_discards_progress() {
        let table = levels::builtin();
        let level = &table[1];
        let mut attempt = AttemptState::new(level);
        attempt.player = Vec2::new(300.0, 300.0);
        attempt.coins.clear();
        for hazard in &mut attempt.hazards {
            hazard.advance();
        }

        attempt.reset(level);
        assert_eq!(attempt, AttemptState::new(level));
    }
}
