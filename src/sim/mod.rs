//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Stable iteration order (authored order of walls, hazards, coins)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod hazard;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Circle, Rect, circle_rect_overlap, rect_overlap};
pub use hazard::{Axis, Direction, HazardConfig, HazardMotion, HazardState, LiveMotion};
pub use level::LevelData;
pub use state::AttemptState;
pub use tick::{GameEvent, TickInput, TickOutcome, tick};
