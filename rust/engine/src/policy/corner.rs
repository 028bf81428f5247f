// rust/engine/src/policy/corner.rs
#![forbid(unsafe_code)]

use crate::engine::Direction;
use crate::env::Observation;
use crate::goal::alternate_vertical;

use super::base::Policy;

/**
 * Deterministic corner-building baseline that reads only the observation.
 *
 * Preference order:
 * - best ranked scoring move (then second, third)
 * - slide_x, slide_y, the other vertical move
 * - any remaining legal move (the worst horizontal move last by construction)
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct GoalPolicy;

impl GoalPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GoalPolicy {
    fn choose_action(&mut self, obs: &Observation) -> Option<usize> {
        let legal = obs.legal();
        if legal.is_empty() {
            return None;
        }
        let is_legal = |d: &Direction| legal.contains(d);

        let ranked = obs.ranked().into_iter().flatten();
        let slides = match (obs.slide_x(), obs.slide_y()) {
            (Some(x), Some(y)) => vec![x, y, alternate_vertical(y)],
            _ => Vec::new(),
        };

        ranked
            .chain(slides)
            .chain(legal.iter().copied())
            .find(is_legal)
            .map(Direction::index)
    }
}
