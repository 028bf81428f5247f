// src/goal/ranking.rs
#![forbid(unsafe_code)]

use crate::engine::{Direction, Grid, SENTINEL, slide};

/// One slot of the ranked candidate list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RankedMove {
    /// Playing this direction would score immediately.
    Scoring(Direction),
    /// Candidate would score nothing; its identity is dropped.
    NonScoring,
}

impl RankedMove {
    pub fn direction(self) -> Option<Direction> {
        match self {
            RankedMove::Scoring(d) => Some(d),
            RankedMove::NonScoring => None,
        }
    }

    pub fn matches(self, dir: Direction) -> bool {
        self == RankedMove::Scoring(dir)
    }

    pub fn label(self) -> &'static str {
        self.direction().map_or("NA", Direction::label)
    }

    pub fn to_obs(self) -> f32 {
        self.direction().map_or(SENTINEL, |d| d.index() as f32)
    }
}

/// Ranked candidates, best first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScoringMoves {
    ranked: [RankedMove; 3],
}

impl ScoringMoves {
    pub fn new(ranked: [RankedMove; 3]) -> Self {
        Self { ranked }
    }

    pub fn ranked(&self) -> [RankedMove; 3] {
        self.ranked
    }

    pub fn best(&self) -> RankedMove {
        self.ranked[0]
    }

    pub fn second(&self) -> RankedMove {
        self.ranked[1]
    }

    pub fn third(&self) -> RankedMove {
        self.ranked[2]
    }

    /// Rank (0 = best) of the first slot holding `dir` as a scoring move.
    pub fn rank_of(&self, dir: Direction) -> Option<usize> {
        self.ranked.iter().position(|m| m.matches(dir))
    }

    pub fn to_obs(&self) -> [f32; 3] {
        self.ranked.map(RankedMove::to_obs)
    }
}

/// The vertical candidate opposite to `slide_y`.
pub fn alternate_vertical(slide_y: Direction) -> Direction {
    if slide_y == Direction::Down {
        Direction::Up
    } else {
        Direction::Down
    }
}

/**
 * Rank `[slide_x, slide_y, alternate_vertical(slide_y)]` by the score each would yield
 * right now, descending. The sort is stable, so equal scores keep candidate order.
 * Zero-score candidates become `RankedMove::NonScoring`.
 */
pub fn score_maximizer(slide_x: Direction, slide_y: Direction, grid: &Grid) -> ScoringMoves {
    let mut scored: Vec<(u64, RankedMove)> = [slide_x, slide_y, alternate_vertical(slide_y)]
        .into_iter()
        .map(|dir| {
            let score = slide(grid, dir).score_gained;
            let slot = if score > 0 {
                RankedMove::Scoring(dir)
            } else {
                RankedMove::NonScoring
            };
            (score, slot)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    ScoringMoves::new([scored[0].1, scored[1].1, scored[2].1])
}
