// rust/py/src/util.rs
#![forbid(unsafe_code)]

use numpy::PyArray2;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use twenty48_engine::{EnvError, Grid};

/**
 * Convert a grid into a NumPy `uint32` array of shape (size, size).
 *
 * Copies through a Vec<Vec<u32>> to stay on numpy's safe constructors.
 */
pub(crate) fn grid_to_pyarray2<'py>(py: Python<'py>, grid: &Grid) -> PyResult<Bound<'py, PyArray2<u32>>> {
    let rows = grid.to_rows();
    PyArray2::from_vec2_bound(py, &rows).map_err(|e| {
        PyValueError::new_err(format!(
            "grid_to_pyarray2: failed to build numpy array from a {n}x{n} grid: {e}",
            n = grid.size()
        ))
    })
}

/// Stepping a finished episode is a protocol error; everything else is bad input.
pub(crate) fn env_err(e: EnvError) -> PyErr {
    match e {
        EnvError::EpisodeDone => PyRuntimeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}
