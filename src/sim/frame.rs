//! Per-frame output
//!
//! The simulation never draws or plays anything itself. Each tick fills a
//! `Frame` with draw commands (in paint order) and audio cues (in trigger
//! order) for the renderer and audio layers to consume.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Sprite};

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// A hazard left the fan
    Tool,
    /// Coin collected
    Collect,
    /// Player hit by a hazard
    Die,
    /// Laser fired
    Shoot,
    /// Laser hit a coin
    Error,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Tool => "tool",
            SoundEffect::Collect => "collect",
            SoundEffect::Die => "die",
            SoundEffect::Shoot => "shoot",
            SoundEffect::Error => "error",
        }
    }
}

/// Looping tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicTrack {
    Music,
}

impl MusicTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicTrack::Music => "music",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    Play(SoundEffect),
    StartLoop(MusicTrack),
    StopLoop(MusicTrack),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Centre,
    Right,
}

/// RGBA, 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255, 255);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        frame: u32,
        /// `None` draws unrotated
        rotation: Option<f32>,
        opacity: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        font: &'static str,
        text: String,
        pos: Vec2,
        align: TextAlign,
    },
}

/// Everything one tick asks the outside world to do
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub draws: Vec<DrawCommand>,
    pub audio: Vec<AudioCue>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
        self.audio.clear();
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.audio.push(AudioCue::Play(effect));
    }

    pub fn start_loop(&mut self, track: MusicTrack) {
        self.audio.push(AudioCue::StartLoop(track));
    }

    pub fn stop_loop(&mut self, track: MusicTrack) {
        self.audio.push(AudioCue::StopLoop(track));
    }

    pub fn draw_background(&mut self) {
        self.draws.push(DrawCommand::Background);
    }

    /// Draw an entity upright at full opacity
    pub fn draw(&mut self, entity: &Entity) {
        self.push_sprite(entity, None, 1.0);
    }

    pub fn draw_rotated(&mut self, entity: &Entity) {
        self.push_sprite(entity, Some(entity.rotation), 1.0);
    }

    pub fn draw_rotated_faded(&mut self, entity: &Entity, opacity: f32) {
        self.push_sprite(entity, Some(entity.rotation), opacity);
    }

    fn push_sprite(&mut self, entity: &Entity, rotation: Option<f32>, opacity: f32) {
        self.draws.push(DrawCommand::Sprite {
            sprite: entity.sprite,
            pos: entity.pos,
            frame: entity.frame,
            rotation,
            opacity,
        });
    }

    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.draws.push(DrawCommand::Line { from, to, color });
    }

    pub fn draw_text(&mut self, font: &'static str, text: impl Into<String>, pos: Vec2, align: TextAlign) {
        self.draws.push(DrawCommand::Text {
            font,
            text: text.into(),
            pos,
            align,
        });
    }

    /// How many times an effect was cued this frame
    pub fn count_played(&self, effect: SoundEffect) -> usize {
        self.audio
            .iter()
            .filter(|c| **c == AudioCue::Play(effect))
            .count()
    }
}
