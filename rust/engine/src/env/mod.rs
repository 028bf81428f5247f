// src/env/mod.rs
#![forbid(unsafe_code)]

//! Reward shaper / environment: step-reset contract consumed by an external agent.

mod config;
mod environment;
mod reward;
mod types;

pub use config::{EnvConfig, RankRefresh};
pub use environment::{Env2048, Environment};
pub use reward::{
    RewardBreakdown, RewardInputs, ShapingTerm, classify, discount_for_step, shaped_reward,
};
pub use types::{EnvError, Observation, Reward, StepInfo, StepResult};
