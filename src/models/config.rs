//! Shuffle configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEAM_SIZE: usize = 5;
pub const DEFAULT_ITERATIONS: usize = 1000;
pub const DEFAULT_MIN_PLAYERS: usize = 10;

/// Tunables for the randomized team search. Missing fields fall back to defaults.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleConfig {
    pub team_size: usize,
    /// Number of random partitions tried per shuffle.
    pub iterations: usize,
    /// Minimum present players for a standard shuffle (not used by the captain draft).
    pub min_players: usize,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            iterations: DEFAULT_ITERATIONS,
            min_players: DEFAULT_MIN_PLAYERS,
        }
    }
}

impl ShuffleConfig {
    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}
