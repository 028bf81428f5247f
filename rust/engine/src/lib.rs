// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

//! 2048 rules engine, goal-direction heuristic, and a shaped-reward RL environment.
//!
//! ```
//! use twenty48_engine::{Env2048, EnvConfig, Environment};
//!
//! let mut env = Env2048::new(EnvConfig::default()).unwrap();
//! let obs = env.reset().unwrap();
//! assert_eq!(obs.as_array().len(), 9);
//! let step = env.step(0).unwrap();
//! assert_eq!(step.info.steps, 1);
//! ```

pub mod engine;
pub mod env;
pub mod goal;
pub mod policy;

// Re-export the bits the bindings and the CLI need:
pub use engine::{
    ACTION_DIM, Board, Direction, EngineError, Grid, LegalMoves, MoveOutcome, OBS_DIM,
    SpawnRuleKind, WINNING_TILE, enumerate_legal_moves, slide,
};
pub use env::{
    Env2048, EnvConfig, EnvError, Environment, Observation, RankRefresh, ShapingTerm, StepInfo,
    StepResult,
};
pub use goal::{GoalState, Quadrant, RankedMove, ScoringMoves, find_goal_space, score_maximizer};
pub use policy::{GoalPolicy, Policy, RandomPolicy};
