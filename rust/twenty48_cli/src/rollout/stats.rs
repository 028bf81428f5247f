// src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use twenty48_engine::{SpawnRuleKind, StepInfo};

use super::sinks::ReportRow;

#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub episodes_finished: u64,
    pub ep_len: u64,
    pub episode_len_sum: u64,
    pub episode_len_max: u64,

    pub steps_done: u64,
    pub invalid_moves: u64,

    // reward/score aggregates (all steps)
    pub sum_reward: f64,
    pub sum_points: u64,

    // tile aggregates
    pub best_tile: u32,
    pub sum_final_tile: u64,
    pub wins: u64,

    t0: Instant,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            episodes_finished: 0,
            ep_len: 0,
            episode_len_sum: 0,
            episode_len_max: 0,
            steps_done: 0,
            invalid_moves: 0,
            sum_reward: 0.0,
            sum_points: 0,
            best_tile: 0,
            sum_final_tile: 0,
            wins: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per environment step.
    pub fn on_step(&mut self, reward: f64, info: &StepInfo, max_tile: u32) {
        self.steps_done += 1;
        self.ep_len += 1;

        if !info.moved {
            self.invalid_moves += 1;
        }
        self.sum_reward += reward;
        self.sum_points += info.points;
        self.best_tile = self.best_tile.max(max_tile);
    }

    /// Call when an episode terminates, before resetting the environment.
    pub fn on_episode_end(&mut self, final_tile: u32, winning_tile: u32) {
        self.episodes_finished += 1;
        self.episode_len_sum += self.ep_len;
        self.episode_len_max = self.episode_len_max.max(self.ep_len);
        self.sum_final_tile += u64::from(final_tile);
        if final_tile >= winning_tile {
            self.wins += 1;
        }

        self.ep_len = 0;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    fn per_step(&self, total: f64) -> f64 {
        if self.steps_done > 0 {
            total / self.steps_done as f64
        } else {
            0.0
        }
    }

    fn per_episode(&self, total: f64) -> f64 {
        if self.episodes_finished > 0 {
            total / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn steps_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.steps_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_ep_len(&self) -> f64 {
        self.per_episode(self.episode_len_sum as f64)
    }

    pub fn avg_final_tile(&self) -> f64 {
        self.per_episode(self.sum_final_tile as f64)
    }

    pub fn score_per_step(&self) -> f64 {
        self.per_step(self.sum_points as f64)
    }

    pub fn reward_per_step(&self) -> f64 {
        self.per_step(self.sum_reward)
    }

    pub fn invalid_rate(&self) -> f64 {
        self.per_step(self.invalid_moves as f64)
    }

    pub fn report_row(&self, steps_total: u64) -> ReportRow {
        ReportRow {
            step: self.steps_done,
            steps_total,
            sps: self.steps_per_sec(),
            episodes_finished: self.episodes_finished,
            avg_ep_len: self.avg_ep_len(),
            max_ep_len: self.episode_len_max,
            score_per_step: self.score_per_step(),
            reward_per_step: self.reward_per_step(),
            invalid_rate: self.invalid_rate(),
            best_tile: self.best_tile,
            avg_final_tile: self.avg_final_tile(),
            wins: self.wins,
        }
    }

    pub fn live_msg(&self, rule: SpawnRuleKind) -> String {
        format!(
            "spawn={} sps={:.1} eps={} avg_ep={:.1} max_ep={} score/step={:.2} invalid={:.3} best={}",
            rule.name(),
            self.steps_per_sec(),
            self.episodes_finished,
            self.avg_ep_len(),
            self.episode_len_max,
            self.score_per_step(),
            self.invalid_rate(),
            self.best_tile,
        )
    }

    pub fn final_report(
        &self,
        policy_name: &str,
        spawn_rule: SpawnRuleKind,
        last_ep_len: u64,
        last_done: bool,
    ) -> FinalReport {
        FinalReport {
            policy: policy_name.to_string(),
            spawn_rule,
            steps_done: self.steps_done,
            elapsed_s: self.elapsed_secs(),
            steps_per_s: self.steps_per_sec(),
            episodes_finished: self.episodes_finished,
            avg_ep_len: self.avg_ep_len(),
            max_ep_len: self.episode_len_max,
            score_per_step: self.score_per_step(),
            reward_per_step: self.reward_per_step(),
            invalid_rate: self.invalid_rate(),
            best_tile: self.best_tile,
            avg_final_tile: self.avg_final_tile(),
            wins: self.wins,
            total_score: self.sum_points,
            last_ep_len,
            last_done,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub policy: String,
    pub spawn_rule: SpawnRuleKind,

    pub steps_done: u64,
    pub elapsed_s: f64,
    pub steps_per_s: f64,

    pub episodes_finished: u64,
    pub avg_ep_len: f64,
    pub max_ep_len: u64,

    pub score_per_step: f64,
    pub reward_per_step: f64,
    pub invalid_rate: f64,

    pub best_tile: u32,
    pub avg_final_tile: f64,
    pub wins: u64,

    pub total_score: u64,

    pub last_ep_len: u64,
    pub last_done: bool,
}
