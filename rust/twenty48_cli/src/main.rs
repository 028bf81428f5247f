// src/main.rs
#![forbid(unsafe_code)]

mod rollout;

use anyhow::{Result, bail};
use clap::Parser;
use env_logger::Env;
use log::info;

use crate::rollout::{NoopSink, RolloutSink, Runner, RunnerConfig, TableSink};
use twenty48_engine::{EnvConfig, GoalPolicy, Policy, RandomPolicy, RankRefresh, SpawnRuleKind};

#[derive(Parser, Debug)]
#[command(name = "twenty48_cli")]
struct Args {
    // ---------------- rollout sizing ----------------
    /// Total environment steps to execute across episodes.
    #[arg(long, default_value_t = 10_000)]
    steps: u64,

    /// Base RNG seed (episodes use base_seed + episode_id). If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Policy: random | goal
    #[arg(long, default_value = "goal")]
    policy: String,

    // ---------------- environment ----------------
    /// Board side length (>= 2).
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Refresh the goal heuristic every N steps.
    #[arg(long, default_value_t = 20)]
    frequency: u64,

    /// Tile that ends the episode once reached.
    #[arg(long, default_value_t = 2048)]
    winning_tile: u32,

    /// Spawn rule: even (2/4 at 50/50) | classic (2/4 at 90/10)
    #[arg(long, default_value = "even")]
    spawn_rule: String,

    /// Ranked-move refresh: with-goal | every-step
    #[arg(long, default_value = "with-goal")]
    rank_refresh: String,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N steps (only used with --verbosity 2).
    #[arg(long, default_value_t = 2000)]
    report_every: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let defaults = EnvConfig::default();
    let env = EnvConfig {
        size: args.size,
        frequency: args.frequency,
        winning_tile: args.winning_tile,
        spawn_rule: SpawnRuleKind::from_cli(&args.spawn_rule),
        rank_refresh: RankRefresh::from_cli(&args.rank_refresh),
        seed: args.seed.unwrap_or(defaults.seed),
        ..defaults
    };
    env.validate()?;

    let mut policy: Box<dyn Policy> = match args.policy.as_str() {
        "goal" | "corner" => Box::new(GoalPolicy::new()),
        "random" => Box::new(RandomPolicy::new(env.seed.wrapping_add(999))),
        other => bail!("unknown policy {other:?} (expected random | goal)"),
    };

    info!(
        "rollout: policy={} steps={} size={} frequency={} winning_tile={} spawn_rule={} rank_refresh={:?} seed={}",
        args.policy,
        args.steps,
        env.size,
        env.frequency,
        env.winning_tile,
        env.spawn_rule.name(),
        env.rank_refresh,
        env.seed
    );

    let cfg = RunnerConfig {
        steps: args.steps,
        env,
        policy_name: args.policy.clone(),
        verbosity: args.verbosity,
        report_every: args.report_every,
    };

    // verbosity 2 => periodic table (unless report_every == 0)
    let sink: Box<dyn RolloutSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        Box::new(TableSink::default())
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run(&mut *policy)?;

    info!(
        "DONE: policy={} spawn_rule={} steps_done={} elapsed={:.3}s steps/s={:.1} episodes_finished={} avg_ep_len={:.2} max_ep_len={} score/step={:.2} reward/step={:.4} invalid_rate={:.3} best_tile={} avg_final_tile={:.1} wins={} total_score={} (last_ep_len={} last_done={})",
        report.policy,
        report.spawn_rule.name(),
        report.steps_done,
        report.elapsed_s,
        report.steps_per_s,
        report.episodes_finished,
        report.avg_ep_len,
        report.max_ep_len,
        report.score_per_step,
        report.reward_per_step,
        report.invalid_rate,
        report.best_tile,
        report.avg_final_tile,
        report.wins,
        report.total_score,
        report.last_ep_len,
        report.last_done,
    );
    Ok(())
}
