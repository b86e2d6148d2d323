use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source, StreamError};
use std::time::Duration;

use crate::world::FrameReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Shot,
    EnemyDown,
    PlayerHit,
    GameOver,
}

impl SoundEffect {
    /// Frequency in Hz, duration and volume of the tone for this effect
    pub fn tone(&self) -> (f32, Duration, f32) {
        match self {
            SoundEffect::Shot => (880.0, Duration::from_millis(40), 0.05),
            SoundEffect::EnemyDown => (440.0, Duration::from_millis(80), 0.08),
            SoundEffect::PlayerHit => (150.0, Duration::from_millis(120), 0.12),
            SoundEffect::GameOver => (110.0, Duration::from_millis(600), 0.15),
        }
    }

    /// Effects to play for a frame, at most one of each kind
    pub fn for_report(report: &FrameReport) -> Vec<SoundEffect> {
        let mut effects = Vec::new();
        if report.shots_fired > 0 {
            effects.push(SoundEffect::Shot);
        }
        if report.enemies_destroyed > 0 {
            effects.push(SoundEffect::EnemyDown);
        }
        if report.game_over {
            effects.push(SoundEffect::GameOver);
        } else if report.player_hits > 0 {
            effects.push(SoundEffect::PlayerHit);
        }
        effects
    }
}

/// Audio manager for playing synthesized sound effects
pub struct AudioManager {
    /// `None` when no output device could be opened or audio is muted
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl AudioManager {
    /// Opens the default output device
    pub fn new() -> Result<Self, StreamError> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        Ok(Self {
            output: Some((stream, stream_handle)),
        })
    }

    /// Manager that accepts every call and plays nothing
    pub fn disabled() -> Self {
        Self { output: None }
    }

    /// Honours `WAVE_SHOOTER_MUTE` and falls back to silence when no device is available
    pub fn from_env() -> Self {
        if crate::config::audio_muted() {
            log::info!("audio muted");
            return Self::disabled();
        }

        Self::new().unwrap_or_else(|err| {
            log::warn!("failed to initialize audio, continuing without sound: {err}");
            Self::disabled()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    pub fn play(&self, effect: SoundEffect) {
        let Some((_, stream_handle)) = &self.output else {
            return;
        };

        // Playback errors are not worth interrupting the game for
        if let Ok(sink) = Sink::try_new(stream_handle) {
            let (frequency, duration, volume) = effect.tone();
            sink.set_volume(volume);
            sink.append(SineWave::new(frequency).take_duration(duration));
            sink.detach();
        }
    }

    pub fn play_report(&self, report: &FrameReport) {
        for effect in SoundEffect::for_report(report) {
            self.play(effect);
        }
    }
}
