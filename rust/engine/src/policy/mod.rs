// src/policy/mod.rs
#![forbid(unsafe_code)]

mod base;
mod corner;
mod random;

/**
 * Curated policy public API.
 *
 * Baseline agents for rollouts and tests; learned policies live outside this crate.
 */
pub use base::Policy;
pub use corner::GoalPolicy;
pub use random::RandomPolicy;
