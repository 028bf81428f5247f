// src/engine/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("board full: no empty cell to place a tile")]
    BoardFull,
    #[error("invalid board size {size} (minimum {min})")]
    InvalidSize { size: usize, min: usize },
    #[error("non-square grid: row {row} has {len} cells, expected {size}")]
    NonSquare { row: usize, len: usize, size: usize },
    #[error("invalid tile {value} at ({row}, {col}): tiles must be 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
}
