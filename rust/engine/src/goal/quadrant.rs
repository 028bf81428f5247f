// src/goal/quadrant.rs
#![forbid(unsafe_code)]

use crate::engine::{Direction, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Quadrant {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Quadrant {
    /// Tie-break order when the maximum tile sits in several quadrants.
    pub const SEARCH_ORDER: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::BottomLeft => "bot-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomRight => "bot-right",
        }
    }

    /// Corner cell `(row, col)` of this quadrant on a `size x size` grid.
    pub fn corner(self, size: usize) -> (usize, usize) {
        let last = size - 1;
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::BottomLeft => (last, 0),
            Quadrant::TopRight => (0, last),
            Quadrant::BottomRight => (last, last),
        }
    }

    pub fn from_corner(row: usize, col: usize, size: usize) -> Option<Self> {
        Self::SEARCH_ORDER
            .into_iter()
            .find(|q| q.corner(size) == (row, col))
    }

    /// Row and column ranges covered by this quadrant (split at `size / 2`).
    fn bounds(self, size: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let half = size / 2;
        match self {
            Quadrant::TopLeft => (0..half, 0..half),
            Quadrant::BottomLeft => (half..size, 0..half),
            Quadrant::TopRight => (0..half, half..size),
            Quadrant::BottomRight => (half..size, half..size),
        }
    }

    pub fn contains_value(self, grid: &Grid, value: u32) -> bool {
        let (rows, cols) = self.bounds(grid.size());
        rows.into_iter()
            .any(|r| grid.row(r)[cols.clone()].contains(&value))
    }

    /// (slide_x, slide_y): the horizontal and vertical moves that push mass into this corner.
    pub fn slide_directions(self) -> (Direction, Direction) {
        match self {
            Quadrant::TopLeft => (Direction::Left, Direction::Up),
            Quadrant::TopRight => (Direction::Right, Direction::Up),
            Quadrant::BottomLeft => (Direction::Left, Direction::Down),
            Quadrant::BottomRight => (Direction::Right, Direction::Down),
        }
    }
}

/// Corner that currently holds the maximum tile.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GoalSpace {
    pub goal_row: usize,
    pub goal_col: usize,
    pub quadrant: Quadrant,
}

impl GoalSpace {
    pub fn label(&self) -> &'static str {
        self.quadrant.label()
    }
}

/// Locate the quadrant holding the maximum tile, first match in `Quadrant::SEARCH_ORDER`.
pub fn find_goal_space(grid: &Grid) -> GoalSpace {
    let max_tile = grid.max_tile();
    let quadrant = Quadrant::SEARCH_ORDER
        .into_iter()
        .find(|q| q.contains_value(grid, max_tile))
        // Quadrants tile the whole grid, so the search always succeeds.
        .unwrap_or(Quadrant::TopLeft);
    let (goal_row, goal_col) = quadrant.corner(grid.size());
    GoalSpace {
        goal_row,
        goal_col,
        quadrant,
    }
}

/// Preferred (horizontal, vertical) slides toward a corner; `None` for non-corner cells.
pub fn slide_to(goal_row: usize, goal_col: usize, size: usize) -> Option<(Direction, Direction)> {
    Quadrant::from_corner(goal_row, goal_col, size).map(Quadrant::slide_directions)
}

/// Goal heuristic snapshot held between refreshes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GoalState {
    pub space: GoalSpace,
    pub slide_x: Direction,
    pub slide_y: Direction,
}

impl GoalState {
    pub fn locate(grid: &Grid) -> Self {
        let space = find_goal_space(grid);
        let (slide_x, slide_y) = space.quadrant.slide_directions();
        Self {
            space,
            slide_x,
            slide_y,
        }
    }

    pub fn label(&self) -> &'static str {
        self.space.label()
    }

    /// The horizontal move that drags mass away from the goal corner.
    pub fn worst_direction(&self) -> Direction {
        self.slide_x.opposite()
    }
}
