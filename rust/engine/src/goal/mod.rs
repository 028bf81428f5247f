// src/goal/mod.rs
#![forbid(unsafe_code)]

//! Goal-direction heuristic: which corner to build toward, and which moves score now.

mod quadrant;
mod ranking;

pub use quadrant::{GoalSpace, GoalState, Quadrant, find_goal_space, slide_to};
pub use ranking::{RankedMove, ScoringMoves, alternate_vertical, score_maximizer};
