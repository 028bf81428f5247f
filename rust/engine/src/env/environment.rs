// src/env/environment.rs
#![forbid(unsafe_code)]

use log::{debug, trace};

use crate::engine::constants::OBS_DIM;
use crate::engine::{ACTION_DIM, Board, Direction, Grid, LegalMoves};
use crate::env::config::{EnvConfig, RankRefresh};
use crate::env::reward::{RewardInputs, shaped_reward};
use crate::env::types::{EnvError, Observation, StepInfo, StepResult};
use crate::goal::{GoalState, ScoringMoves, score_maximizer};

/// Generic environment interface for RL
pub trait Environment {
    /// Type used to represent observations
    type Observation;

    /// Type used to represent actions
    type Action;

    /// Start a fresh episode and return its first observation.
    fn reset(&mut self) -> Result<Self::Observation, EnvError>;

    /// Apply one action and advance the episode by one step.
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>, EnvError>;

    fn observation_dim(&self) -> usize;

    fn action_dim(&self) -> usize;
}

/**
 * 2048 environment with goal-directed reward shaping.
 *
 * States: active until the board turns terminal, then done until the next reset.
 * The goal heuristic (and by default the ranked scoring list) is refreshed every
 * `config.frequency` steps and held stale in between; legal moves are recomputed
 * every step.
 */
pub struct Env2048 {
    config: EnvConfig,
    episode_id: u64,

    board: Board,
    steps: u64,
    prev_score: u64,
    prev_moves: u64,
    discount: f64,
    done: bool,

    goal: GoalState,
    /// Horizontal move away from the goal chosen at reset; fixed for the episode.
    worst: Direction,
    scoring: ScoringMoves,
    legal: LegalMoves,
    observation: Observation,
}

impl Env2048 {
    /// Validate `config` and start the first episode.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        let board = Board::new(config.size, config.seed, config.spawn_rule)?;
        Ok(Self::with_board(config, 0, board))
    }

    fn with_board(config: EnvConfig, episode_id: u64, board: Board) -> Self {
        let goal = GoalState::locate(board.grid());
        let scoring = score_maximizer(goal.slide_x, goal.slide_y, board.grid());
        let legal = board.legal_moves();
        let mut env = Self {
            config,
            episode_id,
            board,
            steps: 0,
            prev_score: 0,
            prev_moves: 0,
            discount: 1.0,
            done: false,
            goal,
            worst: goal.worst_direction(),
            scoring,
            legal,
            observation: Observation::new([0.0; OBS_DIM]),
        };
        env.observation = env.build_observation();
        debug!(
            "reset: episode={} size={} goal={} slide=({}, {}) worst={}",
            env.episode_id,
            env.config.size,
            env.goal.label(),
            env.goal.slide_x.label(),
            env.goal.slide_y.label(),
            env.worst.label()
        );
        env
    }

    fn episode_seed(&self, episode_id: u64) -> u64 {
        self.config.seed.wrapping_add(episode_id)
    }

    /// Restart the seed stream at `seed` and begin a new episode.
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<Observation, EnvError> {
        self.config.seed = seed;
        let board = Board::new(self.config.size, seed, self.config.spawn_rule)?;
        *self = Self::with_board(self.config.clone(), 0, board);
        Ok(self.observation)
    }

    /// Begin a new episode from a supplied grid instead of the two-tile start.
    pub fn reset_from_grid(&mut self, grid: Grid) -> Result<Observation, EnvError> {
        if grid.size() != self.config.size {
            return Err(EnvError::InvalidConfig(format!(
                "grid size {} does not match configured size {}",
                grid.size(),
                self.config.size
            )));
        }
        let episode_id = self.episode_id + 1;
        let board = Board::from_grid(grid, self.episode_seed(episode_id), self.config.spawn_rule);
        *self = Self::with_board(self.config.clone(), episode_id, board);
        Ok(self.observation)
    }

    // -------------------------------------------------------------------------
    // Read-only snapshot accessors (renderers, drivers, tests)
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> &GoalState {
        &self.goal
    }

    pub fn worst_direction(&self) -> Direction {
        self.worst
    }

    pub fn scoring_moves(&self) -> &ScoringMoves {
        &self.scoring
    }

    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal
    }

    pub fn observation(&self) -> Observation {
        self.observation
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn episode_id(&self) -> u64 {
        self.episode_id
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn build_observation(&self) -> Observation {
        let mut v = [0.0f32; OBS_DIM];
        v[Observation::SLIDE_X] = self.goal.slide_x.index() as f32;
        v[Observation::SLIDE_Y] = self.goal.slide_y.index() as f32;
        v[Observation::RANKED..Observation::LEGAL].copy_from_slice(&self.scoring.to_obs());
        v[Observation::LEGAL..].copy_from_slice(&self.legal.to_obs());
        Observation::new(v)
    }

    fn refresh_scoring(&mut self) {
        self.scoring = score_maximizer(self.goal.slide_x, self.goal.slide_y, self.board.grid());
    }
}

impl Environment for Env2048 {
    type Observation = Observation;
    type Action = usize;

    fn reset(&mut self) -> Result<Observation, EnvError> {
        let episode_id = self.episode_id + 1;
        let board = Board::new(
            self.config.size,
            self.episode_seed(episode_id),
            self.config.spawn_rule,
        )?;
        *self = Self::with_board(self.config.clone(), episode_id, board);
        Ok(self.observation)
    }

    fn step(&mut self, action: usize) -> Result<StepResult, EnvError> {
        // 1. Episode and action validation
        if self.done {
            return Err(EnvError::EpisodeDone);
        }
        let dir = Direction::from_index(action).ok_or(EnvError::InvalidAction(action))?;

        // 2. Apply to the live board (spawns on acceptance)
        let outcome = self.board.apply_move(dir)?;

        // 3. Counters
        self.steps += 1;
        let points = self.board.score - self.prev_score;
        let moved = self.board.moves != self.prev_moves;
        let total_mass = self.board.grid().total_mass();

        // 4. Shaped reward against the heuristic that was in force before the move
        let breakdown = shaped_reward(&RewardInputs {
            action: dir,
            moved,
            score_gained: points,
            total_mass,
            scoring: &self.scoring,
            goal: &self.goal,
            legal_before: &self.legal,
            worst: self.worst,
            step: self.steps,
            scale: self.config.reward_scale,
        });
        self.discount = breakdown.discount;
        let mut reward = breakdown.reward;

        trace!(
            "step={} action={} moved={} gained={} mass={} term={} reward={:.4}",
            self.steps,
            dir.label(),
            moved,
            outcome.score_gained,
            total_mass,
            breakdown.term.label(),
            reward
        );

        // 5. Terminal transition carries no score signal
        if self.board.is_terminal(self.config.winning_tile) {
            reward = 0.0;
            self.done = true;
            debug!(
                "episode {} done: steps={} score={} max_tile={}",
                self.episode_id,
                self.steps,
                self.board.score,
                self.board.grid().max_tile()
            );
        }

        let info = StepInfo {
            steps: self.steps,
            score: self.board.score,
            points,
            moved,
            best_move: self.scoring.best().label(),
            next_best: self.scoring.second().label(),
            total: total_mass,
            target: self.goal.label(),
            discount: 1.0 / self.discount,
            shaping: breakdown.term,
        };

        // 6. Low-frequency heuristic refresh
        if self.steps % self.config.frequency == 0 {
            self.goal = GoalState::locate(self.board.grid());
            self.refresh_scoring();
            debug!(
                "goal refresh at step {}: {} slide=({}, {})",
                self.steps,
                self.goal.label(),
                self.goal.slide_x.label(),
                self.goal.slide_y.label()
            );
        } else if self.config.rank_refresh == RankRefresh::EveryStep {
            self.refresh_scoring();
        }

        // 7. Per-step bookkeeping for the next transition
        self.prev_score = self.board.score;
        self.prev_moves = self.board.moves;
        self.legal = self.board.legal_moves();
        self.observation = self.build_observation();

        Ok(StepResult {
            observation: self.observation,
            reward,
            done: self.done,
            info,
        })
    }

    fn observation_dim(&self) -> usize {
        OBS_DIM
    }

    fn action_dim(&self) -> usize {
        ACTION_DIM
    }
}
