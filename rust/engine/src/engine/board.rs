// src/engine/board.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{START_TILES, START_TILE_VALUE};
use crate::engine::error::EngineError;
use crate::engine::grid::Grid;
use crate::engine::moves::{enumerate_legal_moves, slide, Direction, LegalMoves, MoveOutcome};
use crate::engine::spawn::{SpawnRuleKind, TileSpawner};

/// Live game: grid plus cumulative counters and the seeded tile spawner.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    spawner: TileSpawner,

    /// Cumulative merge score; never decreases within an episode.
    pub score: u64,
    /// Accepted moves only.
    pub moves: u64,
}

impl Board {
    /// Fresh board with exactly `START_TILES` tiles of value 2.
    pub fn new(size: usize, seed: u64, rule: SpawnRuleKind) -> Result<Self, EngineError> {
        let mut board = Self::from_grid(Grid::empty(size)?, seed, rule);
        board.populate(START_TILES)?;
        Ok(board)
    }

    /// Adopt an existing grid as-is (fixtures, curriculum starts). Counters start at zero.
    pub fn from_grid(grid: Grid, seed: u64, rule: SpawnRuleKind) -> Self {
        Self {
            grid,
            spawner: TileSpawner::new(seed, rule),
            score: 0,
            moves: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn spawn_rule(&self) -> SpawnRuleKind {
        self.spawner.kind()
    }

    /**
     * Place `n` tiles on uniformly chosen empty cells, re-reading the empty set before
     * each draw so no cell is picked twice.
     *
     * `n == START_TILES` is start mode (every tile is a 2); otherwise values come from
     * the spawn rule.
     */
    pub fn populate(&mut self, n: usize) -> Result<(), EngineError> {
        for _ in 0..n {
            let empty = self.grid.empty_cells();
            if empty.is_empty() {
                return Err(EngineError::BoardFull);
            }
            let (r, c) = empty[self.spawner.pick_index(empty.len())];
            let value = if n == START_TILES {
                START_TILE_VALUE
            } else {
                self.spawner.draw_value()
            };
            self.grid.set(r, c, value);
        }
        Ok(())
    }

    /// Slide without committing anything (no spawn, no RNG use).
    pub fn preview(&self, dir: Direction) -> MoveOutcome {
        slide(&self.grid, dir)
    }

    /**
     * Apply `dir` to the live board.
     *
     * Accepted (grid changed): commit, add the score, spawn one tile, bump `moves`.
     * Rejected: nothing changes.
     *
     * The returned outcome carries the merged grid *before* the spawn.
     */
    pub fn apply_move(&mut self, dir: Direction) -> Result<MoveOutcome, EngineError> {
        let outcome = slide(&self.grid, dir);
        if outcome.moved {
            self.grid = outcome.grid.clone();
            self.score += outcome.score_gained;
            self.populate(1)?;
            self.moves += 1;
        }
        Ok(outcome)
    }

    pub fn legal_moves(&self) -> LegalMoves {
        enumerate_legal_moves(&self.grid)
    }

    pub fn is_terminal(&self, winning_tile: u32) -> bool {
        self.grid.is_terminal(winning_tile)
    }
}
