// src/env/reward.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{
    INVALID_MOVE_PENALTY, MASS_DIVISOR, MISSED_ALTERNATIVE_PENALTY, OTHER_VERTICAL_BONUS,
    RANK_BONUS, SLIDE_X_BONUS, SLIDE_Y_BONUS,
};
use crate::engine::{Direction, LegalMoves};
use crate::goal::{GoalState, ScoringMoves};

/// Which shaping branch fired for a step.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ShapingTerm {
    /// Move did not change the board: flat penalty, nothing else applies.
    Rejected,
    /// Matched the ranked scoring list at this rank (0 = best).
    Ranked(usize),
    SlideX,
    SlideY,
    OtherVertical,
    /// Away-from-goal horizontal move while another legal move existed.
    MissedAlternative,
    /// Away-from-goal horizontal move, but nothing else (besides the worst move) was legal.
    NoAlternative,
}

impl ShapingTerm {
    pub fn bonus(self) -> f64 {
        match self {
            ShapingTerm::Rejected => 0.0,
            ShapingTerm::Ranked(rank) => RANK_BONUS.get(rank).copied().unwrap_or(0.0),
            ShapingTerm::SlideX => SLIDE_X_BONUS,
            ShapingTerm::SlideY => SLIDE_Y_BONUS,
            ShapingTerm::OtherVertical => OTHER_VERTICAL_BONUS,
            ShapingTerm::MissedAlternative => MISSED_ALTERNATIVE_PENALTY,
            ShapingTerm::NoAlternative => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapingTerm::Rejected => "rejected",
            ShapingTerm::Ranked(0) => "ranked-best",
            ShapingTerm::Ranked(1) => "ranked-second",
            ShapingTerm::Ranked(_) => "ranked-third",
            ShapingTerm::SlideX => "slide-x",
            ShapingTerm::SlideY => "slide-y",
            ShapingTerm::OtherVertical => "other-vertical",
            ShapingTerm::MissedAlternative => "missed-alternative",
            ShapingTerm::NoAlternative => "no-alternative",
        }
    }
}

/// Everything the shaper needs about one transition. Heuristic fields describe the
/// state *before* the move.
#[derive(Clone, Copy, Debug)]
pub struct RewardInputs<'a> {
    pub action: Direction,
    pub moved: bool,
    pub score_gained: u64,
    /// Sum of tiles after the move (spawned tile included).
    pub total_mass: u64,
    pub scoring: &'a ScoringMoves,
    pub goal: &'a GoalState,
    pub legal_before: &'a LegalMoves,
    pub worst: Direction,
    /// Step counter after this step (>= 1).
    pub step: u64,
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardBreakdown {
    pub term: ShapingTerm,
    /// Reward before normalization.
    pub raw: f64,
    pub discount: f64,
    /// `raw / (discount * scale)`.
    pub reward: f64,
}

/// `sqrt(ln(step) + 1)`: grows slowly so later steps weigh less.
pub fn discount_for_step(step: u64) -> f64 {
    ((step.max(1) as f64).ln() + 1.0).sqrt()
}

pub fn classify(inputs: &RewardInputs<'_>) -> ShapingTerm {
    if !inputs.moved {
        return ShapingTerm::Rejected;
    }
    if let Some(rank) = inputs.scoring.rank_of(inputs.action) {
        return ShapingTerm::Ranked(rank);
    }
    if inputs.action == inputs.goal.slide_x {
        ShapingTerm::SlideX
    } else if inputs.action == inputs.goal.slide_y {
        ShapingTerm::SlideY
    } else if inputs.action.is_vertical() {
        ShapingTerm::OtherVertical
    } else if inputs.legal_before.any_except(inputs.worst) {
        ShapingTerm::MissedAlternative
    } else {
        ShapingTerm::NoAlternative
    }
}

/**
 * Shaped reward for one transition.
 *
 * Rejected: flat `INVALID_MOVE_PENALTY`.
 * Accepted: `score_gained + total_mass / 10 + bonus(term)`.
 * Either way the result is divided by `discount_for_step(step) * scale`.
 */
pub fn shaped_reward(inputs: &RewardInputs<'_>) -> RewardBreakdown {
    let term = classify(inputs);
    let raw = match term {
        ShapingTerm::Rejected => INVALID_MOVE_PENALTY,
        _ => {
            inputs.score_gained as f64 + inputs.total_mass as f64 / MASS_DIVISOR + term.bonus()
        }
    };
    let discount = discount_for_step(inputs.step);
    RewardBreakdown {
        term,
        raw,
        discount,
        reward: raw / (discount * inputs.scale),
    }
}
