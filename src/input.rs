//! Keyboard state tracking
//!
//! The platform layer reports which keys are down each frame. `Keyboard`
//! keeps this frame's and last frame's sets so it can answer both "held"
//! and "pressed this frame" queries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Space,
    Escape,
}

/// A key held down over the frames `from..until`, for headless runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedKey {
    pub key: Key,
    pub from: u64,
    pub until: u64,
}

impl ScriptedKey {
    pub fn is_down(&self, frame: u64) -> bool {
        (self.from..self.until).contains(&frame)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: HashSet<Key>,
    previous: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with the given set of keys down
    pub fn update(&mut self, down: impl IntoIterator<Item = Key>) {
        self.previous = std::mem::take(&mut self.held);
        self.held.extend(down);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// True only on the frame the key went down
    pub fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key) && !self.previous.contains(&key)
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            fire: self.is_pressed(Key::Space),
            quit: self.is_held(Key::Escape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut kb = Keyboard::new();

        kb.update([Key::Space]);
        assert!(kb.tick_input().fire);

        // Still held: no new shot
        kb.update([Key::Space]);
        assert!(!kb.tick_input().fire);
        assert!(kb.is_held(Key::Space));

        kb.update([]);
        kb.update([Key::Space]);
        assert!(kb.tick_input().fire);
    }

    #[test]
    fn test_held_keys() {
        let mut kb = Keyboard::new();
        kb.update([Key::Up, Key::Escape]);
        let input = kb.tick_input();
        assert!(input.up);
        assert!(!input.down);
        assert!(input.quit);

        kb.update([Key::Up]);
        assert!(kb.tick_input().up);
        assert!(!kb.is_pressed(Key::Up));
    }

    #[test]
    fn test_scripted_key_window() {
        let tap = ScriptedKey {
            key: Key::Space,
            from: 10,
            until: 11,
        };
        assert!(!tap.is_down(9));
        assert!(tap.is_down(10));
        assert!(!tap.is_down(11));
    }
}
