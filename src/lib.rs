use pyo3::prelude::*;

pub mod format {
    pub mod matrix;
    pub mod number;
}
pub mod matrix;
pub mod py;
pub mod solve {
    pub mod engine;
    pub mod steps;
}

/// A Python module implemented in Rust.
#[pymodule]
fn gauss_steps(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<py::Step>()?;
    m.add_class::<py::Solved>()?;
    m.add_function(wrap_pyfunction!(py::parse_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(py::solve, m)?)?;
    Ok(())
}
