//! Audio playback
//!
//! Consumes the `AudioCue`s a tick produces. Volume and mute live here, the
//! actual output goes through an `AudioBackend`.

use std::collections::HashMap;

use crate::settings::Settings;
use crate::sim::{AudioCue, MusicTrack, SoundEffect};

/// Where sounds actually go
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn start_loop(&mut self, track: MusicTrack, volume: f32);
    fn stop_loop(&mut self, track: MusicTrack);
}

/// Headless backend that only logs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {} @ {:.2}", effect.as_str(), volume);
    }

    fn start_loop(&mut self, track: MusicTrack, volume: f32) {
        log::debug!("loop {} started @ {:.2}", track.as_str(), volume);
    }

    fn stop_loop(&mut self, track: MusicTrack) {
        log::debug!("loop {} stopped", track.as_str());
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend = LogBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_playing: bool,
    played: HashMap<SoundEffect, u32>,
}

impl Default for AudioManager<LogBackend> {
    fn default() -> Self {
        Self::new(LogBackend)
    }
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            music_playing: false,
            played: HashMap::new(),
        }
    }

    /// Take volumes and mute from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_music_volume(settings.music_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// How many times an effect has been triggered (muted or not)
    pub fn played(&self, effect: SoundEffect) -> u32 {
        self.played.get(&effect).copied().unwrap_or(0)
    }

    /// Apply a tick's cues in order
    pub fn handle(&mut self, cues: &[AudioCue]) {
        for cue in cues {
            match *cue {
                AudioCue::Play(effect) => self.play(effect),
                AudioCue::StartLoop(track) => self.start_loop(track),
                AudioCue::StopLoop(track) => self.stop_loop(track),
            }
        }
    }

    pub fn play(&mut self, effect: SoundEffect) {
        *self.played.entry(effect).or_insert(0) += 1;

        let vol = self.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Start (or restart) a looping track
    pub fn start_loop(&mut self, track: MusicTrack) {
        if self.music_playing {
            self.backend.stop_loop(track);
        }
        self.music_playing = true;
        let vol = self.effective_music_volume();
        self.backend.start_loop(track, vol);
    }

    pub fn stop_loop(&mut self, track: MusicTrack) {
        if !self.music_playing {
            return;
        }
        self.music_playing = false;
        self.backend.stop_loop(track);
    }

    /// Release the backend, stopping anything still looping
    pub fn shutdown(mut self) -> B {
        self.stop_loop(MusicTrack::Music);
        self.backend
    }
}
