// src/engine/spawn.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum SpawnRuleKind {
    /// 2 or 4 with probability 1/2 each.
    #[default]
    Even,
    /// 2 with probability 0.9, 4 with probability 0.1.
    Classic,
}

impl SpawnRuleKind {
    pub fn from_cli(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "classic" | "90/10" | "standard" => SpawnRuleKind::Classic,
            _ => SpawnRuleKind::Even,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpawnRuleKind::Even => "even",
            SpawnRuleKind::Classic => "classic",
        }
    }
}

/// Owns the episode RNG: the only source of nondeterminism in the engine.
#[derive(Clone, Debug)]
pub struct TileSpawner {
    kind: SpawnRuleKind,
    rng: StdRng,
}

impl TileSpawner {
    pub fn new(seed: u64, kind: SpawnRuleKind) -> Self {
        Self {
            kind,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn kind(&self) -> SpawnRuleKind {
        self.kind
    }

    /// Uniform index in `0..n`. Caller guarantees `n > 0`.
    pub fn pick_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    /// Value of a tile spawned after a move.
    pub fn draw_value(&mut self) -> u32 {
        let p_two = match self.kind {
            SpawnRuleKind::Even => 0.5,
            SpawnRuleKind::Classic => 0.9,
        };
        if self.rng.gen_bool(p_two) {
            2
        } else {
            4
        }
    }
}
