//! Game state and the simulation session
//!
//! `GameState` is the small shared record every pass reads and writes
//! (score and player state). `Session` owns it together with the entity
//! store and the dice.

use serde::{Deserialize, Serialize};

use super::bounds::Display;
use super::entity::{Category, Sprite};
use super::rng::{Dice, Roll};
use super::world::EntityStore;
use crate::consts::*;

/// Player (Agent8) state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    /// Dropping in from the top of the screen
    #[default]
    Appearing,
    /// Braking after a fast fall
    Halting,
    /// Under player control
    Playing,
    /// Hit by a hazard, spinning away until restart
    Dead,
}

impl PlayerState {
    /// Transition table. Death can come from any live state because the
    /// hazard check only skips a player who is already dead.
    pub fn can_transition_to(self, next: PlayerState) -> bool {
        use PlayerState::*;
        matches!(
            (self, next),
            (Appearing, Playing)
                | (Playing, Halting)
                | (Halting, Playing)
                | (Appearing, Dead)
                | (Playing, Dead)
                | (Halting, Dead)
                | (Dead, Appearing)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerState::Appearing => "Appearing",
            PlayerState::Halting => "Halting",
            PlayerState::Playing => "Playing",
            PlayerState::Dead => "Dead",
        }
    }
}

/// Score and player state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    player_state: PlayerState,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_state(&self) -> PlayerState {
        self.player_state
    }

    pub fn is_dead(&self) -> bool {
        self.player_state == PlayerState::Dead
    }

    /// Move to `next` if the table allows it. Returns whether it happened.
    pub fn transition(&mut self, next: PlayerState) -> bool {
        let current = self.player_state;
        if !current.can_transition_to(next) {
            log::warn!(
                "Rejected player transition {} -> {}",
                current.as_str(),
                next.as_str()
            );
            return false;
        }
        log::debug!("Player {} -> {}", current.as_str(), next.as_str());
        self.player_state = next;
        true
    }

    /// Apply a signed score change, clamping at zero
    pub fn apply_score_delta(&mut self, delta: i64) {
        let total = self.score as i64 + delta;
        self.score = total.max(0) as u64;
    }
}

/// A running game: entities, state, dice
#[derive(Debug, Clone)]
pub struct Session<R: Roll = Dice> {
    pub state: GameState,
    pub entities: EntityStore,
    pub dice: R,
    pub display: Display,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Session<Dice> {
    /// Create a new session with the given seed and the default display
    pub fn new(seed: u64) -> Self {
        Self::with_dice(Dice::new(seed), Display::default())
    }
}

impl<R: Roll> Session<R> {
    /// Create a session with custom dice and display, spawning Agent8 and the fan
    pub fn with_dice(dice: R, display: Display) -> Self {
        let mut entities = EntityStore::new();

        entities.create(Category::Player, PLAYER_SPAWN, PLAYER_RADIUS, Sprite::Agent8);

        let fan = entities.create(Category::Spawner, display.fan_spawn(), 0.0, Sprite::Fan);
        if let Some(fan) = entities.get_mut(fan) {
            fan.velocity = FAN_VELOCITY;
            fan.anim_speed = FAN_ANIM_SPEED;
        }

        Self {
            state: GameState::new(),
            entities,
            dice,
            display,
            time_ticks: 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn player_state(&self) -> PlayerState {
        self.state.player_state()
    }
}
