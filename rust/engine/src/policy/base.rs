// rust/engine/src/policy/base.rs
#![forbid(unsafe_code)]

use crate::env::Observation;

/// Policy chooses a move from an observation.
///
/// Returns an action index in `[0, ACTION_DIM)`, or `None` if the observation reports
/// no legal move.
///
/// Object-safe so it can be used as `Box<dyn Policy>`.
pub trait Policy {
    fn choose_action(&mut self, obs: &Observation) -> Option<usize>;
}
