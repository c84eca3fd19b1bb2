//! Audio cues
//!
//! The session controller reports what should be heard; synthesis is left to
//! the host. `AudioManager` queues cues for the host to drain each frame.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Coin picked up (one cue per coin)
    Coin,
    /// Player hit a hazard
    Death,
    /// Level restarted after a death
    LevelReset,
    /// Exit reached with every coin
    LevelComplete,
    /// Background music (re)started
    Music,
}

/// Receiver of sound cues, passed into the session controller by the host
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);

    /// Start or keep the background music going
    fn start_music(&mut self) {
        self.play(SoundCue::Music);
    }
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
    pending: Vec<SoundCue>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            pending: Vec::new(),
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio. Muting drops anything still queued.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.pending.clear();
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Take every cue queued since the last drain, oldest first
    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.pending)
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: SoundCue) {
        if self.effective_volume() <= 0.0 {
            return;
        }
        log::trace!("Queued sound cue {:?}", cue);
        self.pending.push(cue);
    }
}
