// rust/engine/src/policy/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::env::Observation;

use super::base::Policy;

/// Uniform over the legal moves reported in the observation.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, obs: &Observation) -> Option<usize> {
        let legal = obs.legal();
        let &dir = legal.choose(&mut self.rng)?;
        Some(dir.index())
    }
}
