//! Session controller
//!
//! Top-level state machine: menu, playing, completed. Owns the level table,
//! the live attempt and the death counter, and drives the simulation one tick
//! at a time on behalf of the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, SoundCue};
use crate::config::SimConfig;
use crate::error::{ConfigError, SessionError};
use crate::sim::{AttemptState, Circle, GameEvent, LevelData, Rect, TickInput, tick};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu is showing; any attempt in progress is frozen
    Menu,
    /// Ticks advance the current attempt
    Playing,
    /// Final level cleared
    Completed,
}

/// One play session over a fixed level table
#[derive(Debug)]
pub struct Session<A: AudioSink> {
    levels: Vec<LevelData>,
    config: SimConfig,
    audio: A,
    phase: GamePhase,
    level_index: usize,
    deaths: u32,
    attempt: AttemptState,
    input: TickInput,
    /// A game was started and has not been completed yet
    in_progress: bool,
}

impl<A: AudioSink> Session<A> {
    /// Validate the table and config, then wait in the menu
    pub fn new(levels: Vec<LevelData>, config: SimConfig, audio: A) -> Result<Self, ConfigError> {
        config.validate()?;
        crate::levels::validate_table(&levels, config.player_size)?;
        let attempt = AttemptState::new(&levels[0]);
        Ok(Self {
            levels,
            config,
            audio,
            phase: GamePhase::Menu,
            level_index: 0,
            deaths: 0,
            attempt,
            input: TickInput::default(),
            in_progress: false,
        })
    }

    /// Session over the authored levels with default tuning
    pub fn with_builtin_levels(audio: A) -> Result<Self, ConfigError> {
        Self::new(crate::levels::builtin(), SimConfig::default(), audio)
    }

    /// Start (or replay) from the first level with a zeroed death counter
    pub fn start_game(&mut self) {
        self.audio.start_music();
        self.deaths = 0;
        self.enter_level(0);
        self.phase = GamePhase::Playing;
        self.in_progress = true;
        log::info!("Game started ({} levels)", self.levels.len());
    }

    /// Start playing at a specific level, keeping the death counter
    pub fn select_level(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.levels.len() {
            return Err(ConfigError::LevelIndexOutOfRange {
                index,
                count: self.levels.len(),
            }
            .into());
        }
        self.enter_level(index);
        self.phase = GamePhase::Playing;
        self.in_progress = true;
        Ok(())
    }

    /// Show the menu without touching progress or the death counter
    pub fn go_to_menu(&mut self) {
        self.audio.start_music();
        self.phase = GamePhase::Menu;
        self.input = TickInput::default();
    }

    /// Leave the menu and continue the attempt exactly where it was
    pub fn resume(&mut self) -> Result<(), SessionError> {
        if !self.in_progress {
            return Err(SessionError::NoGameInProgress);
        }
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Movement keys held this frame; call once per frame before `tick`
    pub fn submit_input(&mut self, held: TickInput) {
        self.input = held;
    }

    /// Advance one frame
    ///
    /// Outside `Playing` this is a no-op that returns `None`.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::Playing {
            log::warn!("tick() called in {:?}, ignoring", self.phase);
            return None;
        }

        let outcome = tick(
            &mut self.attempt,
            &self.levels[self.level_index],
            &self.input,
            &self.config,
        );
        for _ in 0..outcome.coins_collected {
            self.audio.play(SoundCue::Coin);
        }

        match outcome.event {
            Some(GameEvent::Died) => {
                self.deaths += 1;
                self.input = TickInput::default();
                self.audio.play(SoundCue::Death);
                self.audio.play(SoundCue::LevelReset);
                log::debug!("Died on level {} (deaths: {})", self.level_id(), self.deaths);
            }
            Some(GameEvent::LevelComplete) => {
                self.audio.play(SoundCue::LevelComplete);
                let next = self.level_index + 1;
                if next < self.levels.len() {
                    self.enter_level(next);
                    log::info!("Advanced to level {}", self.level_id());
                } else {
                    self.phase = GamePhase::Completed;
                    self.in_progress = false;
                    self.input = TickInput::default();
                    log::info!("All {} levels completed with {} deaths", self.levels.len(), self.deaths);
                }
            }
            None => {}
        }

        outcome.event
    }

    fn enter_level(&mut self, index: usize) {
        self.level_index = index;
        self.attempt = AttemptState::new(&self.levels[index]);
        self.input = TickInput::default();
    }

    fn level_id(&self) -> u32 {
        self.levels[self.level_index].id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Level currently being played (walls, zones, bounds)
    pub fn level(&self) -> &LevelData {
        &self.levels[self.level_index]
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn attempt(&self) -> &AttemptState {
        &self.attempt
    }

    pub fn player_rect(&self) -> Rect {
        self.attempt.player_rect(self.config.player_size)
    }

    pub fn hazard_circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.attempt.hazard_circles(self.config.hazard_radius)
    }

    pub fn remaining_coins(&self) -> &[Vec2] {
        self.attempt.remaining_coins()
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioManager, NullAudio};
    use crate::sim::{Axis, Direction, HazardConfig};

    /// Level whose spawn already sits in the exit: completes on the first tick
    fn instant_win(id: u32) -> LevelData {
        LevelData {
            id,
            start_zone: Rect::new(0.0, 0.0, 100.0, 100.0),
            end_zone: Rect::new(0.0, 0.0, 100.0, 100.0),
            walls: Vec::new(),
            coins: Vec::new(),
            hazards: Vec::new(),
            spawn_point: Vec2::new(10.0, 10.0),
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
        }
    }

    /// Level with a hazard parked on the spawn: dies on the first tick
    fn instant_death(id: u32) -> LevelData {
        LevelData {
            id,
            start_zone: Rect::new(0.0, 0.0, 100.0, 100.0),
            end_zone: Rect::new(300.0, 200.0, 100.0, 100.0),
            walls: Vec::new(),
            coins: vec![Vec2::new(150.0, 150.0)],
            hazards: vec![HazardConfig::linear(
                Vec2::new(25.0, 25.0),
                Axis::Horizontal,
                1.0,
                2.0,
                Direction::Positive,
            )],
            spawn_point: Vec2::new(10.0, 10.0),
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
        }
    }

    fn five_instant_wins() -> Session<NullAudio> {
        let levels = (1..=5).map(instant_win).collect();
        Session::new(levels, SimConfig::default(), NullAudio).unwrap()
    }

    #[test]
    fn test_starts_in_menu() {
        let mut session = five_instant_wins();
        assert_eq!(session.phase(), GamePhase::Menu);
        assert_eq!(session.tick(), None);
        assert!(matches!(session.resume(), Err(SessionError::NoGameInProgress)));
    }

    #[test]
    fn test_progression_through_table() {
        let mut session = five_instant_wins();
        session.start_game();
        for expected in 1..=4 {
            assert_eq!(session.tick(), Some(GameEvent::LevelComplete));
            assert_eq!(session.level_index(), expected);
            assert_eq!(session.phase(), GamePhase::Playing);
        }
        assert_eq!(session.tick(), Some(GameEvent::LevelComplete));
        assert_eq!(session.phase(), GamePhase::Completed);
        assert_eq!(session.level_index(), 4);

        // No ticking once completed
        assert_eq!(session.tick(), None);

        session.start_game();
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.level_index(), 0);
    }

    #[test]
    fn test_deaths_count_and_reset() {
        let levels = vec![instant_death(1), instant_win(2)];
        let mut session = Session::new(levels, SimConfig::default(), NullAudio).unwrap();
        session.start_game();
        for n in 1..=3 {
            assert_eq!(session.tick(), Some(GameEvent::Died));
            assert_eq!(session.deaths(), n);
            assert_eq!(session.level_index(), 0);
        }

        session.go_to_menu();
        assert_eq!(session.deaths(), 3);
        session.resume().unwrap();
        assert_eq!(session.deaths(), 3);
        assert_eq!(session.phase(), GamePhase::Playing);

        session.start_game();
        assert_eq!(session.deaths(), 0);
    }

    #[test]
    fn test_menu_round_trip_preserves_attempt() {
        let mut session = Session::with_builtin_levels(NullAudio).unwrap();
        session.start_game();
        session.submit_input(TickInput {
            right: true,
            ..Default::default()
        });
        session.tick();
        let snapshot = session.attempt().clone();

        session.go_to_menu();
        assert_eq!(session.tick(), None);
        session.resume().unwrap();

        assert_eq!(session.attempt(), &snapshot);
        assert_eq!(session.level_index(), 0);
    }

    #[test]
    fn test_death_rebuilds_attempt_and_clears_input() {
        let levels = vec![instant_death(1)];
        let mut session = Session::new(levels, SimConfig::default(), NullAudio).unwrap();
        session.start_game();
        session.submit_input(TickInput {
            down: true,
            ..Default::default()
        });
        assert_eq!(session.tick(), Some(GameEvent::Died));
        assert_eq!(session.attempt(), &AttemptState::new(session.level()));
        assert_eq!(session.input, TickInput::default());
    }

    #[test]
    fn test_select_level_bounds() {
        let mut session = five_instant_wins();
        assert!(matches!(
            session.select_level(5),
            Err(SessionError::Config(ConfigError::LevelIndexOutOfRange { index: 5, count: 5 }))
        ));
        assert_eq!(session.phase(), GamePhase::Menu);

        session.select_level(3).unwrap();
        assert_eq!(session.level_index(), 3);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_invalid_table_rejected() {
        assert!(matches!(
            Session::new(Vec::new(), SimConfig::default(), NullAudio),
            Err(ConfigError::EmptyLevelTable)
        ));

        let mut bad = instant_win(1);
        bad.bounds.w = 0.0;
        assert!(matches!(
            Session::new(vec![bad], SimConfig::default(), NullAudio),
            Err(ConfigError::InvalidRect { .. })
        ));
    }

    #[test]
    fn test_audio_cues() {
        let levels = vec![instant_death(1), instant_win(2)];
        let mut session = Session::new(levels, SimConfig::default(), AudioManager::new()).unwrap();
        session.start_game();
        session.tick();
        assert_eq!(
            session.audio_mut().drain(),
            vec![SoundCue::Music, SoundCue::Death, SoundCue::LevelReset]
        );

        session.select_level(1).unwrap();
        session.tick();
        assert_eq!(session.audio_mut().drain(), vec![SoundCue::LevelComplete]);
        assert_eq!(session.phase(), GamePhase::Completed);
    }

    #[test]
    fn test_coin_cue_per_coin() {
        let mut level = instant_win(1);
        level.end_zone = Rect::new(300.0, 200.0, 100.0, 100.0);
        level.coins = vec![Vec2::new(20.0, 20.0), Vec2::new(30.0, 30.0)];
        let mut session = Session::new(vec![level], SimConfig::default(), AudioManager::new()).unwrap();
        session.start_game();
        session.audio_mut().drain();

        assert_eq!(session.tick(), None);
        assert_eq!(session.audio_mut().drain(), vec![SoundCue::Coin, SoundCue::Coin]);
        assert!(session.remaining_coins().is_empty());
    }

    #[test]
    fn test_snapshot_accessors() {
        let mut session = Session::with_builtin_levels(NullAudio).unwrap();
        session.start_game();
        assert_eq!(session.level_count(), 5);
        assert_eq!(session.player_rect(), Rect::new(135.0, 235.0, 30.0, 30.0));
        assert_eq!(session.hazard_circles().count(), 4);
        assert!(session.hazard_circles().all(|c| c.r == 10.0));
        assert_eq!(session.level().walls.len(), 6);
    }
}
