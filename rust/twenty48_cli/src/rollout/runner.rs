// src/rollout/runner.rs
#![forbid(unsafe_code)]

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use twenty48_engine::{Env2048, EnvConfig, Environment, Policy};

use super::sinks::RolloutSink;
use super::stats::{FinalReport, RolloutStats};

/// Fixed internal cadence for progress-bar live message updates.
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core rollout ----------------
    /// Total environment steps to execute across episodes.
    pub steps: u64,
    /// Environment settings; `env.seed` is the base seed (episode seed = base + episode_id).
    pub env: EnvConfig,

    /// Used only for the final report string.
    pub policy_name: String,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N steps (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, policy: &mut dyn Policy) -> Result<FinalReport> {
        let cfg = self.cfg.clone();

        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.steps);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )?
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = RolloutStats::new();
        let winning_tile = cfg.env.winning_tile;

        let mut env = Env2048::new(cfg.env.clone())?;
        let mut obs = env.observation();

        while stats.steps_done < cfg.steps {
            // ------------------------------------------------------------
            // Episode boundary: finalize counters, then reset.
            // ------------------------------------------------------------
            if env.is_done() {
                stats.on_episode_end(env.board().grid().max_tile(), winning_tile);
                debug!(
                    "episode {} finished: len={} score={} max_tile={}",
                    env.episode_id(),
                    env.steps(),
                    env.board().score,
                    env.board().grid().max_tile()
                );
                obs = env.reset()?;
                continue;
            }

            let Some(aid) = policy.choose_action(&obs) else {
                // A live board always has a legal move; treat this as a stuck episode.
                warn!(
                    "policy {} returned no action on a live board (episode {})",
                    cfg.policy_name,
                    env.episode_id()
                );
                stats.on_episode_end(env.board().grid().max_tile(), winning_tile);
                obs = env.reset()?;
                continue;
            };

            let r = env.step(aid)?;
            obs = r.observation;
            stats.on_step(r.reward, &r.info, env.board().grid().max_tile());

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // ------------------------------------------------------------
            // Periodic table report (verbosity == 2 only).
            // ------------------------------------------------------------
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.steps_done % cfg.report_every == 0)
            {
                let row = stats.report_row(cfg.steps);
                self.sink.on_report_row(&row, pb.as_ref());
            }

            if cfg.verbosity >= 1 && (stats.steps_done % LIVE_EVERY == 0) {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg(cfg.env.spawn_rule));
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        Ok(stats.final_report(
            &cfg.policy_name,
            cfg.env.spawn_rule,
            env.steps(),
            env.is_done(),
        ))
    }
}
