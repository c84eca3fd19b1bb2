//! Authored level table
//!
//! The pattern generators here expand rotating formations into flat hazard
//! lists. The simulation only ever sees the expanded `HazardConfig`s.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, PLAYER_SIZE};
use crate::error::ConfigError;
use crate::sim::{Axis, Direction, HazardConfig, LevelData, Rect};

const W: f32 = FIELD_WIDTH;
const H: f32 = FIELD_HEIGHT;

/// Four arms of `dots_per_arm` hazards rotating around (cx, cy)
pub fn rotating_cross(cx: f32, cy: f32, speed: f32, radius: f32, dots_per_arm: u32) -> Vec<HazardConfig> {
    let spacing = radius / dots_per_arm as f32;
    (0..4)
        .flat_map(|arm| {
            let base_angle = FRAC_PI_2 * arm as f32;
            (1..=dots_per_arm).map(move |i| {
                HazardConfig::circular(Vec2::new(cx, cy), speed, i as f32 * spacing, base_angle)
            })
        })
        .collect()
}

/// Two opposed arms of `dots` hazards rotating around (cx, cy)
///
/// `direction` is folded into the sign of the angular speed.
pub fn propeller(cx: f32, cy: f32, speed: f32, length: f32, dots: u32, direction: Direction) -> Vec<HazardConfig> {
    let spacing = length / dots as f32;
    let speed = speed * direction.sign();
    (1..=dots)
        .flat_map(|i| {
            let r = i as f32 * spacing;
            [
                HazardConfig::circular(Vec2::new(cx, cy), speed, r, 0.0),
                HazardConfig::circular(Vec2::new(cx, cy), speed, r, PI),
            ]
        })
        .collect()
}

fn vertical(x: f32, y: f32, speed: f32, range: f32, direction: Direction) -> HazardConfig {
    HazardConfig::linear(Vec2::new(x, y), Axis::Vertical, speed, range, direction)
}

fn horizontal(x: f32, y: f32, speed: f32, range: f32, direction: Direction) -> HazardConfig {
    HazardConfig::linear(Vec2::new(x, y), Axis::Horizontal, speed, range, direction)
}

fn field() -> Rect {
    Rect::new(0.0, 0.0, W, H)
}

/// The five authored levels
pub fn builtin() -> Vec<LevelData> {
    use Direction::{Negative as Neg, Positive as Pos};

    vec![
        // The basics: one corridor, four vertical guards
        LevelData {
            id: 1,
            start_zone: Rect::new(100.0, 150.0, 100.0, 200.0),
            end_zone: Rect::new(600.0, 150.0, 100.0, 200.0),
            spawn_point: Vec2::new(135.0, 235.0),
            coins: Vec::new(),
            hazards: vec![
                vertical(280.0, 250.0, 4.0, 60.0, Pos),
                vertical(360.0, 250.0, 4.0, 60.0, Neg),
                vertical(440.0, 250.0, 4.0, 60.0, Pos),
                vertical(520.0, 250.0, 4.0, 60.0, Neg),
            ],
            walls: vec![
                Rect::new(0.0, 0.0, W, 150.0),
                Rect::new(0.0, 350.0, W, 100.0),
                Rect::new(0.0, 0.0, 100.0, H),
                Rect::new(700.0, 0.0, 100.0, H),
                Rect::new(200.0, 150.0, 400.0, 70.0),
                Rect::new(200.0, 280.0, 400.0, 70.0),
            ],
            bounds: field(),
        },
        // Coins and tight squeezes
        LevelData {
            id: 2,
            start_zone: Rect::new(50.0, 50.0, 100.0, 100.0),
            end_zone: Rect::new(650.0, 300.0, 100.0, 100.0),
            spawn_point: Vec2::new(80.0, 80.0),
            coins: vec![Vec2::new(400.0, 225.0), Vec2::new(200.0, 350.0)],
            hazards: vec![
                horizontal(250.0, 100.0, 5.0, 120.0, Pos),
                horizontal(450.0, 150.0, 5.0, 120.0, Neg),
                horizontal(250.0, 200.0, 6.0, 120.0, Pos),
                horizontal(450.0, 350.0, 7.0, 120.0, Neg),
                vertical(400.0, 225.0, 3.0, 50.0, Pos),
            ],
            walls: vec![
                Rect::new(0.0, 0.0, 50.0, H),
                Rect::new(750.0, 0.0, 50.0, H),
                Rect::new(0.0, 0.0, W, 50.0),
                Rect::new(0.0, 400.0, W, 50.0),
                Rect::new(200.0, 150.0, 50.0, 150.0),
                Rect::new(550.0, 150.0, 50.0, 150.0),
            ],
            bounds: field(),
        },
        // Windmills
        LevelData {
            id: 3,
            start_zone: Rect::new(50.0, 175.0, 100.0, 100.0),
            end_zone: Rect::new(650.0, 175.0, 100.0, 100.0),
            spawn_point: Vec2::new(75.0, 225.0),
            coins: vec![Vec2::new(300.0, 150.0), Vec2::new(500.0, 300.0)],
            hazards: [
                propeller(250.0, 225.0, 0.04, 110.0, 5, Pos),
                propeller(400.0, 225.0, 0.04, 110.0, 5, Neg),
                propeller(550.0, 225.0, 0.04, 110.0, 5, Pos),
            ]
            .concat(),
            walls: vec![
                Rect::new(0.0, 0.0, W, 100.0),
                Rect::new(0.0, 350.0, W, 100.0),
                Rect::new(0.0, 0.0, 50.0, H),
                Rect::new(750.0, 0.0, 50.0, H),
            ],
            bounds: field(),
        },
        // The processor: big rotating cross with fast edge guards
        LevelData {
            id: 4,
            start_zone: Rect::new(50.0, 50.0, 80.0, 80.0),
            end_zone: Rect::new(670.0, 320.0, 80.0, 80.0),
            spawn_point: Vec2::new(90.0, 90.0),
            coins: vec![
                Vec2::new(650.0, 100.0),
                Vec2::new(150.0, 350.0),
                Vec2::new(400.0, 225.0),
            ],
            hazards: [
                rotating_cross(400.0, 225.0, 0.02, 180.0, 7),
                vec![
                    vertical(200.0, 225.0, 8.0, 150.0, Pos),
                    vertical(600.0, 225.0, 8.0, 150.0, Neg),
                ],
            ]
            .concat(),
            walls: vec![
                Rect::new(0.0, 0.0, W, 50.0),
                Rect::new(0.0, 400.0, W, 50.0),
                Rect::new(0.0, 0.0, 50.0, H),
                Rect::new(750.0, 0.0, 50.0, H),
                Rect::new(50.0, 350.0, 50.0, 50.0),
                Rect::new(700.0, 50.0, 50.0, 50.0),
            ],
            bounds: field(),
        },
        // Almost impossible
        LevelData {
            id: 5,
            start_zone: Rect::new(350.0, 190.0, 100.0, 70.0),
            end_zone: Rect::new(50.0, 190.0, 50.0, 70.0),
            spawn_point: Vec2::new(400.0, 225.0),
            coins: vec![
                Vec2::new(700.0, 100.0),
                Vec2::new(700.0, 350.0),
                Vec2::new(100.0, 100.0),
                Vec2::new(100.0, 350.0),
            ],
            hazards: [
                rotating_cross(400.0, 225.0, -0.05, 120.0, 5),
                vec![
                    vertical(550.0, 225.0, 10.0, 170.0, Pos),
                    vertical(600.0, 225.0, 10.0, 170.0, Neg),
                    vertical(650.0, 225.0, 10.0, 170.0, Pos),
                    horizontal(200.0, 100.0, 12.0, 100.0, Pos),
                    horizontal(200.0, 350.0, 12.0, 100.0, Neg),
                ],
                propeller(700.0, 100.0, 0.08, 40.0, 2, Pos),
                propeller(700.0, 350.0, 0.08, 40.0, 2, Neg),
                propeller(100.0, 100.0, 0.08, 40.0, 2, Pos),
                propeller(100.0, 350.0, 0.08, 40.0, 2, Neg),
            ]
            .concat(),
            walls: vec![
                Rect::new(0.0, 0.0, W, 50.0),
                Rect::new(0.0, 400.0, W, 50.0),
                Rect::new(0.0, 0.0, 50.0, H),
                Rect::new(750.0, 0.0, 50.0, H),
                Rect::new(480.0, 50.0, 20.0, 120.0),
                Rect::new(480.0, 280.0, 20.0, 120.0),
                Rect::new(300.0, 50.0, 20.0, 120.0),
                Rect::new(300.0, 280.0, 20.0, 120.0),
            ],
            bounds: field(),
        },
    ]
}

/// Validate every level of a table
pub fn validate_table(levels: &[LevelData], player_size: f32) -> Result<(), ConfigError> {
    if levels.is_empty() {
        return Err(ConfigError::EmptyLevelTable);
    }
    levels.iter().try_for_each(|level| level.validate(player_size))
}

/// Parse and validate a level table from JSON (an array of levels)
pub fn from_json(json: &str) -> Result<Vec<LevelData>, ConfigError> {
    let levels: Vec<LevelData> = serde_json::from_str(json)?;
    validate_table(&levels, PLAYER_SIZE)?;
    log::info!("Loaded {} levels from JSON", levels.len());
    Ok(levels)
}
