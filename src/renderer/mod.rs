//! Draw-list consumers
//!
//! A tick produces an ordered list of `DrawCommand`s. A `Renderer` walks
//! it in order and presents once per frame.

use crate::sim::{DrawCommand, Frame};

pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);

    /// Flip the finished frame to the screen
    fn present(&mut self);

    /// Draw every command of a frame, then present
    fn render(&mut self, frame: &Frame) {
        for command in &frame.draws {
            self.draw(command);
        }
        self.present();
    }
}

/// Per-frame draw counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub sprites: u32,
    /// Sprites drawn with opacity below 1 (fading out)
    pub faded: u32,
    pub lines: u32,
    pub texts: u32,
}

/// Headless renderer: counts what would have been drawn
#[derive(Debug, Default)]
pub struct StatsRenderer {
    current: DrawStats,
    last: DrawStats,
    frames: u64,
}

impl StatsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts for the most recently presented frame
    pub fn last_frame(&self) -> DrawStats {
        self.last
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Renderer for StatsRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Background => self.current = DrawStats::default(),
            DrawCommand::Sprite { sprite, opacity, .. } => {
                log::trace!("sprite {} @ {:.2}", sprite.as_str(), opacity);
                self.current.sprites += 1;
                if *opacity < 1.0 {
                    self.current.faded += 1;
                }
            }
            DrawCommand::Line { .. } => self.current.lines += 1,
            DrawCommand::Text { text, .. } => {
                self.current.texts += 1;
                log::trace!("text: {}", text);
            }
        }
    }

    fn present(&mut self) {
        self.last = std::mem::take(&mut self.current);
        self.frames += 1;
    }
}
