//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per displayed frame, no internal clock
//! - Seeded dice only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies: output goes to a `Frame`

pub mod bounds;
pub mod collectible;
pub mod entity;
pub mod fade;
pub mod frame;
pub mod hazard;
pub mod player;
pub mod projectile;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod world;

pub use bounds::{Axis, Display, intersects};
pub use entity::{Category, Entity, EntityId, Sprite};
pub use frame::{AudioCue, Color, DrawCommand, Frame, MusicTrack, SoundEffect, TextAlign};
pub use rng::{Dice, Roll};
pub use state::{GameState, PlayerState, Session};
pub use tick::{TickInput, TickStatus, tick};
pub use world::EntityStore;
