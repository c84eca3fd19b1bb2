//! Hazard Run - a deterministic corridor-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, hazards, collisions, attempt state)
//! - `session`: Menu/playing/completed state machine driving the simulation
//! - `levels`: Authored level table and hazard pattern generators
//! - `audio`: Sound cue collaborator consumed by the session
//! - `config`: Data-driven simulation tuning

pub mod audio;
pub mod config;
pub mod error;
pub mod levels;
pub mod session;
pub mod sim;

pub use audio::{AudioManager, AudioSink, NullAudio, SoundCue};
pub use config::SimConfig;
pub use error::{ConfigError, SessionError};
pub use session::{GamePhase, Session};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 450.0;

    /// Player square side length
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Player movement per tick along each held axis (pixels)
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Collision radius shared by every hazard
    pub const HAZARD_RADIUS: f32 = 10.0;
    /// Collision radius shared by every coin
    pub const COIN_RADIUS: f32 = 10.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
