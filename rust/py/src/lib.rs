// rust/py/src/lib.rs
#![forbid(unsafe_code)]

mod dicts;
mod env;
mod util;

use pyo3::prelude::*;

use crate::env::PyEnv2048;

#[pymodule]
fn twenty48_rl_env(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEnv2048>()?;
    m.add("ACTION_DIM", twenty48_engine::ACTION_DIM)?;
    m.add("OBS_DIM", twenty48_engine::OBS_DIM)?;
    Ok(())
}
