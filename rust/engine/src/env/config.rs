// src/env/config.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{DEFAULT_FREQUENCY, DEFAULT_SIZE, MIN_SIZE, REWARD_SCALE};
use crate::engine::{SpawnRuleKind, WINNING_TILE};
use crate::env::types::EnvError;

/// When the ranked scoring-move list is recomputed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum RankRefresh {
    /// Together with the goal heuristic, every `frequency` steps.
    #[default]
    WithGoal,
    /// After every step, against whichever goal is currently held.
    EveryStep,
}

impl RankRefresh {
    pub fn from_cli(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "every-step" | "every_step" | "step" => RankRefresh::EveryStep,
            _ => RankRefresh::WithGoal,
        }
    }
}

/// Environment configuration parameters
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// Grid side length.
    pub size: usize,

    /// Goal heuristic refresh cadence in steps (deliberately stale in between).
    pub frequency: u64,

    /// Rewards are divided by `discount * reward_scale`.
    pub reward_scale: f64,

    /// A tile of at least this value ends the episode.
    pub winning_tile: u32,

    pub spawn_rule: SpawnRuleKind,

    pub rank_refresh: RankRefresh,

    /// Base seed; episode `k` uses `seed + k`.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            frequency: DEFAULT_FREQUENCY,
            reward_scale: REWARD_SCALE,
            winning_tile: WINNING_TILE,
            spawn_rule: SpawnRuleKind::default(),
            rank_refresh: RankRefresh::default(),
            seed: 12345,
        }
    }
}

impl EnvConfig {
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.size < MIN_SIZE {
            return Err(EnvError::InvalidConfig(format!(
                "size must be >= {MIN_SIZE}, got {}",
                self.size
            )));
        }
        if self.frequency == 0 {
            return Err(EnvError::InvalidConfig(
                "frequency must be >= 1".to_string(),
            ));
        }
        if !(self.reward_scale.is_finite() && self.reward_scale > 0.0) {
            return Err(EnvError::InvalidConfig(format!(
                "reward_scale must be a positive finite number, got {}",
                self.reward_scale
            )));
        }
        if self.winning_tile < 4 || !self.winning_tile.is_power_of_two() {
            return Err(EnvError::InvalidConfig(format!(
                "winning_tile must be a power of two >= 4, got {}",
                self.winning_tile
            )));
        }
        Ok(())
    }
}
