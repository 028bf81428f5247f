// rust/py/src/dicts.rs
#![forbid(unsafe_code)]

use pyo3::prelude::*;
use pyo3::types::PyDict;

use twenty48_engine::StepInfo;

pub(crate) fn step_info_to_dict<'py>(py: Python<'py>, info: &StepInfo) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new_bound(py);
    d.set_item("steps", info.steps)?;
    d.set_item("score", info.score)?;
    d.set_item("points", info.points)?;
    d.set_item("moved", info.moved)?;
    d.set_item("best_move", info.best_move)?;
    d.set_item("next_best", info.next_best)?;
    d.set_item("total", info.total)?;
    d.set_item("target", info.target)?;
    d.set_item("discount", info.discount)?;
    d.set_item("shaping", info.shaping.label())?;
    Ok(d)
}
