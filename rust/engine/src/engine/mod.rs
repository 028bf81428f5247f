// rust/engine/src/engine/mod.rs
#![forbid(unsafe_code)]

pub mod constants;
mod board;
mod error;
mod geometry;
mod grid;
mod moves;
mod spawn;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use board::Board;
pub use constants::{
    ACTION_DIM, DEFAULT_SIZE, MAX_TILE, MIN_SIZE, OBS_DIM, SENTINEL, WINNING_TILE,
};
pub use error::EngineError;
pub use geometry::{
    Transform, apply_transforms, flip_horizontal, post_transform, pre_transform, rotate_ccw,
};
pub use grid::{Grid, compact_and_merge, compact_right, merge_pairs};
pub use moves::{Direction, LegalMoves, MoveOutcome, enumerate_legal_moves, slide};
pub use spawn::{SpawnRuleKind, TileSpawner};
