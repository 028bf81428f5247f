// src/engine/constants.rs
#![forbid(unsafe_code)]

/// Number of discrete actions (left, right, up, down).
pub const ACTION_DIM: usize = 4;

/// Observation layout: [slide_x, slide_y, best, second, third, legal_left, legal_right, legal_up, legal_down].
pub const OBS_DIM: usize = 9;

pub const DEFAULT_SIZE: usize = 4;
pub const MIN_SIZE: usize = 2;

/// Largest tile a supplied grid may hold; merging two of them still fits in `u32`.
pub const MAX_TILE: u32 = 1 << 30;

/// Reaching this tile ends the episode.
pub const WINNING_TILE: u32 = 2048;

/// Tiles placed when a board is created (always value 2).
pub const START_TILES: usize = 2;
pub const START_TILE_VALUE: u32 = 2;

/// Goal heuristic refresh cadence, in steps.
pub const DEFAULT_FREQUENCY: u64 = 20;

/// Rewards are divided by `discount * REWARD_SCALE`.
pub const REWARD_SCALE: f64 = 100.0;

/// Observation value for "not applicable" slots (illegal move, non-scoring rank).
pub const SENTINEL: f32 = -1.0;

/**
 * Reward shaping terms (pre-normalization).
 *
 * Ranked bonuses are exclusive and tested best -> third. Slide bonuses only apply
 * when the action matched none of the ranked slots.
 */
pub const INVALID_MOVE_PENALTY: f64 = -100.0;
pub const RANK_BONUS: [f64; 3] = [200.0, 150.0, 100.0];
pub const SLIDE_X_BONUS: f64 = 75.0;
pub const SLIDE_Y_BONUS: f64 = 50.0;
pub const OTHER_VERTICAL_BONUS: f64 = 25.0;
pub const MISSED_ALTERNATIVE_PENALTY: f64 = -100.0;

/// Divisor applied to the board's total mass before it is added to the reward.
pub const MASS_DIVISOR: f64 = 10.0;
