//! Fixed-step simulation tick
//!
//! One call advances the attempt by exactly one frame, in a fixed order:
//! player X, player Y, hazards, death, coins, win.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Rect, circle_rect_overlap, rect_overlap};
use super::level::LevelData;
use super::state::AttemptState;
use crate::config::SimConfig;

/// Movement keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Per-tick displacement. Opposing keys cancel; diagonals are not normalized.
    pub fn delta(&self, speed: f32) -> Vec2 {
        let mut d = Vec2::ZERO;
        if self.up {
            d.y -= speed;
        }
        if self.down {
            d.y += speed;
        }
        if self.left {
            d.x -= speed;
        }
        if self.right {
            d.x += speed;
        }
        d
    }
}

/// Terminal outcome of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched a hazard; the attempt has been reset
    Died,
    /// Player reached the exit with every coin; the attempt has been reset
    LevelComplete,
}

/// Everything a tick reports back to its caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub event: Option<GameEvent>,
    /// Coins removed this tick (always zero when the player died)
    pub coins_collected: usize,
}

/// Advance the attempt by one tick
pub fn tick(
    attempt: &mut AttemptState,
    level: &LevelData,
    input: &TickInput,
    config: &SimConfig,
) -> TickOutcome {
    let size = config.player_size;
    let delta = input.delta(config.player_speed);

    // Axes are resolved independently so the player slides along walls
    if delta.x != 0.0 {
        attempt.player.x += delta.x;
        if blocked(attempt.player, size, level) {
            attempt.player.x -= delta.x;
        }
    }
    if delta.y != 0.0 {
        attempt.player.y += delta.y;
        if blocked(attempt.player, size, level) {
            attempt.player.y -= delta.y;
        }
    }

    for hazard in &mut attempt.hazards {
        hazard.advance();
    }

    let player_rect = attempt.player_rect(size);

    if let Some(index) = attempt
        .hazards
        .iter()
        .position(|h| circle_rect_overlap(&h.circle(config.hazard_radius), &player_rect))
    {
        log::debug!("Level {}: hit hazard {}", level.id, index);
        attempt.reset(level);
        return TickOutcome {
            event: Some(GameEvent::Died),
            coins_collected: 0,
        };
    }

    let before = attempt.coins.len();
    attempt
        .coins
        .retain(|&c| !circle_rect_overlap(&Circle::new(c, config.coin_radius), &player_rect));
    let coins_collected = before - attempt.coins.len();
    if coins_collected > 0 {
        log::debug!(
            "Level {}: collected {} coin(s), {} left",
            level.id,
            coins_collected,
            attempt.coins.len()
        );
    }

    if attempt.all_coins_collected() && reached_exit(&player_rect, &level.end_zone) {
        attempt.reset(level);
        return TickOutcome {
            event: Some(GameEvent::LevelComplete),
            coins_collected,
        };
    }

    log::trace!("Level {}: player at {:?}", level.id, attempt.player);
    TickOutcome {
        event: None,
        coins_collected,
    }
}

/// Player square at `pos` overlaps a wall or leaves the level bounds
fn blocked(pos: Vec2, size: f32, level: &LevelData) -> bool {
    let rect = Rect::square(pos, size);
    if rect.x < level.bounds.x
        || rect.right() > level.bounds.right()
        || rect.y < level.bounds.y
        || rect.bottom() > level.bounds.bottom()
    {
        return true;
    }
    level.walls.iter().any(|wall| rect_overlap(&rect, wall))
}

/// Overlap alone is not enough: the player's center must be inside the zone
fn reached_exit(player: &Rect, end_zone: &Rect) -> bool {
    rect_overlap(player, end_zone) && end_zone.contains_point_strict(player.center())
}
