// src/engine/geometry.rs
#![forbid(unsafe_code)]

use crate::engine::grid::Grid;
use crate::engine::moves::Direction;

/// One orientation step. Rotations are counter-clockwise quarter turns (numpy `rot90` convention).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transform {
    FlipHorizontal,
    RotateCcw(u8),
}

impl Transform {
    pub fn apply(self, grid: &Grid) -> Grid {
        match self {
            Transform::FlipHorizontal => flip_horizontal(grid),
            Transform::RotateCcw(k) => rotate_ccw(grid, k),
        }
    }
}

/**
 * Orientation adapters: `pre` turns `dir` into "rightward", `post` undoes it.
 *
 * | dir   | pre               | post               |
 * |-------|-------------------|--------------------|
 * | right | -                 | -                  |
 * | left  | flip              | flip               |
 * | up    | rot90, flip       | flip, rot270       |
 * | down  | rot90             | rot270             |
 */
pub fn pre_transform(dir: Direction) -> &'static [Transform] {
    match dir {
        Direction::Right => &[],
        Direction::Left => &[Transform::FlipHorizontal],
        Direction::Up => &[Transform::RotateCcw(1), Transform::FlipHorizontal],
        Direction::Down => &[Transform::RotateCcw(1)],
    }
}

pub fn post_transform(dir: Direction) -> &'static [Transform] {
    match dir {
        Direction::Right => &[],
        Direction::Left => &[Transform::FlipHorizontal],
        Direction::Up => &[Transform::FlipHorizontal, Transform::RotateCcw(3)],
        Direction::Down => &[Transform::RotateCcw(3)],
    }
}

pub fn apply_transforms(grid: &Grid, steps: &[Transform]) -> Grid {
    steps.iter().fold(grid.clone(), |g, t| t.apply(&g))
}

/// Mirror each row left <-> right.
pub fn flip_horizontal(grid: &Grid) -> Grid {
    let mut out = grid.clone();
    for r in 0..grid.size() {
        out.row_mut(r).reverse();
    }
    out
}

/// Rotate counter-clockwise by `quarter_turns * 90` degrees.
pub fn rotate_ccw(grid: &Grid, quarter_turns: u8) -> Grid {
    let n = grid.size();
    let mut out = grid.clone();
    for _ in 0..(quarter_turns % 4) {
        let src = out.clone();
        for i in 0..n {
            for j in 0..n {
                out.set(i, j, src.get(j, n - 1 - i));
            }
        }
    }
    out
}
