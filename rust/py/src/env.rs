// rust/py/src/env.rs
#![forbid(unsafe_code)]

use numpy::{PyArray1, PyArray2};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use twenty48_engine::{
    ACTION_DIM, Env2048, EnvConfig, Environment, Grid, OBS_DIM, Observation, RankRefresh,
    SpawnRuleKind,
};

use crate::dicts::step_info_to_dict;
use crate::util::{env_err, grid_to_pyarray2};

fn obs_to_pyarray<'py>(py: Python<'py>, obs: &Observation) -> Bound<'py, PyArray1<f32>> {
    PyArray1::from_vec_bound(py, obs.to_vec())
}

#[pyclass(name = "Env2048")]
pub struct PyEnv2048 {
    env: Env2048,
}

#[pymethods]
impl PyEnv2048 {
    /// Env2048(size=4, seed=12345, frequency=20, reward_scale=100.0, winning_tile=2048,
    ///         spawn_rule="even", rank_refresh="with-goal")
    ///
    /// Seeding notes:
    /// - The environment is deterministic given (seed, config).
    /// - `reset()` without a seed advances to episode seed `seed + episode_id`.
    #[new]
    #[pyo3(signature = (
        size=4,
        seed=12345,
        frequency=20,
        reward_scale=100.0,
        winning_tile=2048,
        spawn_rule="even",
        rank_refresh="with-goal"
    ))]
    fn new(
        size: usize,
        seed: u64,
        frequency: u64,
        reward_scale: f64,
        winning_tile: u32,
        spawn_rule: &str,
        rank_refresh: &str,
    ) -> PyResult<Self> {
        let config = EnvConfig {
            size,
            frequency,
            reward_scale,
            winning_tile,
            spawn_rule: SpawnRuleKind::from_cli(spawn_rule),
            rank_refresh: RankRefresh::from_cli(rank_refresh),
            seed,
        };
        let env = Env2048::new(config).map_err(env_err)?;
        Ok(Self { env })
    }

    // ---------------------------------------------------------------------
    // Constants
    // ---------------------------------------------------------------------

    fn observation_dim(&self) -> usize {
        OBS_DIM
    }

    fn action_dim(&self) -> usize {
        ACTION_DIM
    }

    fn size(&self) -> usize {
        self.env.config().size
    }

    // ---------------------------------------------------------------------
    // Episode control
    // ---------------------------------------------------------------------

    /// reset(seed=None) -> float32[9]
    ///
    /// With a seed, restarts the seed stream there (episode 0).
    #[pyo3(signature = (seed=None))]
    fn reset<'py>(&mut self, py: Python<'py>, seed: Option<u64>) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let obs = match seed {
            Some(s) => self.env.reset_with_seed(s),
            None => self.env.reset(),
        }
        .map_err(env_err)?;
        Ok(obs_to_pyarray(py, &obs))
    }

    /// reset_from_grid(rows) -> float32[9]
    ///
    /// Start an episode from a supplied square grid (0 = empty, tiles powers of two).
    fn reset_from_grid<'py>(
        &mut self,
        py: Python<'py>,
        rows: Vec<Vec<u32>>,
    ) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let grid = Grid::from_rows(&rows).map_err(|e| env_err(e.into()))?;
        let obs = self.env.reset_from_grid(grid).map_err(env_err)?;
        Ok(obs_to_pyarray(py, &obs))
    }

    /// step(action) -> (obs, reward, done, info)
    ///
    /// Raises ValueError for an action outside 0..4 and RuntimeError after the episode ended.
    #[allow(clippy::type_complexity)]
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray1<f32>>, f64, bool, Bound<'py, PyDict>)> {
        let r = self.env.step(action).map_err(env_err)?;
        let info = step_info_to_dict(py, &r.info)?;
        Ok((obs_to_pyarray(py, &r.observation), r.reward, r.done, info))
    }

    // ---------------------------------------------------------------------
    // Read-only snapshot (rendering / logging)
    // ---------------------------------------------------------------------

    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        obs_to_pyarray(py, &self.env.observation())
    }

    /// Returns grid as uint32 array of shape (size, size).
    fn grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        grid_to_pyarray2(py, self.env.board().grid())
    }

    /// Legal action ids (0=left, 1=right, 2=up, 3=down).
    fn legal_moves(&self) -> Vec<usize> {
        self.env.legal_moves().iter().map(|d| d.index()).collect()
    }

    /// Goal corner label ("top-left", "bot-left", "top-right", "bot-right").
    fn target(&self) -> &'static str {
        self.env.goal().label()
    }

    fn score(&self) -> u64 {
        self.env.board().score
    }

    fn moves(&self) -> u64 {
        self.env.board().moves
    }

    fn steps(&self) -> u64 {
        self.env.steps()
    }

    fn max_tile(&self) -> u32 {
        self.env.board().grid().max_tile()
    }

    fn done(&self) -> bool {
        self.env.is_done()
    }

    fn spawn_rule(&self) -> &'static str {
        self.env.config().spawn_rule.name()
    }
}
