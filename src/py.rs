use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::format::matrix::{matrix_to_string, solution_to_string};
use crate::matrix::AugMatrix;
use crate::solve::engine::{eliminate, Mode};
use crate::solve::steps::StepRecorder;

#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct Step {
    title: String,
    cells: Vec<Vec<f64>>,
    text: String,
    note: Option<String>,
}

#[pymethods]
impl Step {
    #[getter]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[getter]
    pub fn cells(&self) -> Vec<Vec<f64>> {
        self.cells.clone()
    }

    #[getter]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[getter]
    pub fn note(&self) -> Option<String> {
        self.note.clone()
    }

    pub fn __repr__(&self) -> String {
        format!("Step({:?})", self.title)
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct Solved {
    steps: Vec<Step>,
    solution: Option<Vec<f64>>,
    rank: usize,
    pivot_cols: Vec<Option<usize>>,
}

#[pymethods]
impl Solved {
    #[getter]
    pub fn steps(&self) -> Vec<Step> {
        self.steps.clone()
    }

    #[getter]
    pub fn solution(&self) -> Option<Vec<f64>> {
        self.solution.clone()
    }

    #[getter]
    pub fn rank(&self) -> usize {
        self.rank
    }

    #[getter]
    pub fn pivot_cols(&self) -> Vec<Option<usize>> {
        self.pivot_cols.clone()
    }

    pub fn solution_text(&self) -> Option<String> {
        self.solution.as_ref().map(|s| solution_to_string(s))
    }
}

// Input boundary: blank cells become 0.0, anything non-numeric is rejected
// here so the engine only ever sees numbers.
#[pyfunction]
pub fn parse_matrix(rows: Vec<Vec<String>>) -> PyResult<Vec<Vec<f64>>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|raw| {
                    let raw = raw.trim();
                    if raw.is_empty() {
                        return Ok(0.0);
                    }
                    raw.parse::<f64>()
                        .map_err(|_| PyValueError::new_err("All values must be numeric"))
                })
                .collect()
        })
        .collect()
}

#[pyfunction]
pub fn solve(matrix: Vec<Vec<f64>>, mode: &str) -> PyResult<Solved> {
    let mode: Mode = match mode.parse() {
        Ok(mode) => mode,
        Err(error) => return Err(PyValueError::new_err(error)),
    };

    let input = AugMatrix::from_list(matrix);
    let mut recorder = StepRecorder::new();

    let result = match eliminate(&input, mode, &mut recorder) {
        Ok(result) => result,
        Err(error) => return Err(PyValueError::new_err(error)),
    };

    let steps = recorder
        .into_steps()
        .into_iter()
        .map(|s| Step {
            title: s.title,
            cells: s.snapshot.to_list(),
            text: matrix_to_string(&s.snapshot),
            note: s.note,
        })
        .collect();

    Ok(Solved {
        steps,
        solution: result.solution,
        rank: result.rank,
        pivot_cols: result.pivot_cols,
    })
}
