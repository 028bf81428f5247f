// src/env/types.rs
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::engine::constants::{ACTION_DIM, OBS_DIM, SENTINEL};
use crate::engine::{Direction, EngineError};
use crate::env::reward::ShapingTerm;

/// Reward value (float)
pub type Reward = f64;

/**
 * Fixed 9-slot observation:
 * `[slide_x, slide_y, best, second, third, legal_left, legal_right, legal_up, legal_down]`.
 * Slots that do not apply hold `SENTINEL` (-1).
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation([f32; OBS_DIM]);

impl Observation {
    pub const SLIDE_X: usize = 0;
    pub const SLIDE_Y: usize = 1;
    pub const RANKED: usize = 2;
    pub const LEGAL: usize = 5;

    pub fn new(values: [f32; OBS_DIM]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f32; OBS_DIM] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }

    pub fn slide_x(&self) -> Option<Direction> {
        decode_slot(self.0[Self::SLIDE_X])
    }

    pub fn slide_y(&self) -> Option<Direction> {
        decode_slot(self.0[Self::SLIDE_Y])
    }

    /// Ranked scoring moves, best first (`None` = non-scoring).
    pub fn ranked(&self) -> [Option<Direction>; 3] {
        std::array::from_fn(|i| decode_slot(self.0[Self::RANKED + i]))
    }

    /// Legal directions as reported by the observation, in action order.
    pub fn legal(&self) -> Vec<Direction> {
        self.0[Self::LEGAL..Self::LEGAL + ACTION_DIM]
            .iter()
            .filter_map(|&v| decode_slot(v))
            .collect()
    }
}

fn decode_slot(v: f32) -> Option<Direction> {
    if v == SENTINEL || v < 0.0 {
        return None;
    }
    Direction::from_index(v as usize)
}

/// Diagnostics for one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepInfo {
    /// Steps taken this episode (rejected moves included).
    pub steps: u64,
    /// Cumulative score.
    pub score: u64,
    /// Score gained by this step.
    pub points: u64,
    pub moved: bool,
    /// Best / next-best ranked moves that scored this step ("NA" when non-scoring).
    pub best_move: &'static str,
    pub next_best: &'static str,
    /// Total mass (sum of tiles) after the step.
    pub total: u64,
    /// Goal corner label in force for this step.
    pub target: &'static str,
    /// Inverse discount, `1 / sqrt(ln(steps) + 1)`.
    pub discount: f64,
    /// Which shaping term decided the bonus/penalty.
    pub shaping: ShapingTerm,
}

/// Result of an environment step
#[derive(Clone, Debug)]
pub struct StepResult<O = Observation> {
    pub observation: O,
    pub reward: Reward,
    pub done: bool,
    pub info: StepInfo,
}

/// Error types for Environment::step() and construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    /// step() called after the episode has already terminated
    #[error("episode finished: call reset() before stepping again")]
    EpisodeDone,

    /// Action index outside `0..ACTION_DIM`
    #[error("invalid action {0}: expected 0..4 (0=left, 1=right, 2=up, 3=down)")]
    InvalidAction(usize),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
