//! Dice rolls for spawning
//!
//! The simulation only ever asks for small integer rolls. `Dice` is the
//! seeded implementation, tests swap in a scripted one.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Integer dice used by the spawner
pub trait Roll {
    /// Uniform in `[1, n]`
    fn roll(&mut self, n: u32) -> u32;
    /// Uniform in `[lo, hi]`
    fn roll_range(&mut self, lo: i32, hi: i32) -> i32;
}

/// Seeded PCG dice; the same seed replays the same session
#[derive(Debug, Clone)]
pub struct Dice {
    seed: u64,
    rng: Pcg32,
}

impl Dice {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Roll for Dice {
    fn roll(&mut self, n: u32) -> u32 {
        self.rng.random_range(1..=n.max(1))
    }

    fn roll_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}
