// src/engine/moves.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{ACTION_DIM, SENTINEL};
use crate::engine::geometry::{apply_transforms, post_transform, pre_transform};
use crate::engine::grid::{compact_and_merge, Grid};

/// Action indices are fixed: 0=left, 1=right, 2=up, 3=down.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; ACTION_DIM] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Result of sliding a grid in one direction. No tile has been spawned yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub score_gained: u64,
    /// True iff the slide changed the grid (the move is accepted).
    pub moved: bool,
}

/// Pure transition kernel: orient, run the rightward primitive on every row, orient back.
pub fn slide(grid: &Grid, dir: Direction) -> MoveOutcome {
    let mut work = apply_transforms(grid, pre_transform(dir));

    let mut score_gained = 0u64;
    for r in 0..work.size() {
        score_gained += compact_and_merge(work.row_mut(r));
    }

    let result = apply_transforms(&work, post_transform(dir));
    let moved = result != *grid;
    MoveOutcome {
        grid: result,
        score_gained,
        moved,
    }
}

/// Four slots in action order; `Some(dir)` where that move would be accepted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LegalMoves {
    slots: [Option<Direction>; ACTION_DIM],
}

impl LegalMoves {
    pub fn from_directions(dirs: &[Direction]) -> Self {
        let mut slots = [None; ACTION_DIM];
        for &d in dirs {
            slots[d.index()] = Some(d);
        }
        Self { slots }
    }

    pub fn slots(&self) -> [Option<Direction>; ACTION_DIM] {
        self.slots
    }

    #[inline]
    pub fn is_legal(&self, dir: Direction) -> bool {
        self.slots[dir.index()].is_some()
    }

    pub fn any(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// True iff some move other than `excluded` is legal.
    pub fn any_except(&self, excluded: Direction) -> bool {
        self.iter().any(|d| d != excluded)
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Observation encoding: direction index, or `SENTINEL` when illegal.
    pub fn to_obs(&self) -> [f32; ACTION_DIM] {
        self.slots
            .map(|s| s.map_or(SENTINEL, |d| d.index() as f32))
    }
}

/// Probe all four directions on a copy; never spawns and never touches randomness.
pub fn enumerate_legal_moves(grid: &Grid) -> LegalMoves {
    let legal: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&dir| slide(grid, dir).moved)
        .collect();
    LegalMoves::from_directions(&legal)
}
