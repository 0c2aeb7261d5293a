//! Python bindings for symnmf.

use numpy::{PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::fmt::Display;

use symnmf_core::prelude::{
    degree as degree_goal, normalized as normalized_goal, similarity as similarity_goal,
    Matrix, PointsInput, SymNmf,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a SymNmfError to a PyErr
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Convert a core matrix into a 2-D numpy array
fn matrix_to_pyarray<'py>(
    py: Python<'py>,
    matrix: &Matrix<f64>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let rows: Vec<Vec<f64>> = (0..matrix.rows()).map(|i| matrix.row(i).to_vec()).collect();
    PyArray2::from_vec2(py, &rows).map_err(to_py_error)
}

/// Materialize the point set from any accepted Python representation
fn extract_points(points: &Bound<'_, PyAny>) -> PyResult<Vec<Vec<f64>>> {
    // Prefer the numpy path; fall back to nested sequences.
    if let Ok(array) = points.extract::<PyReadonlyArray2<'_, f64>>() {
        return array.as_array().to_points().map_err(to_py_error);
    }
    points.extract::<Vec<Vec<f64>>>()
}

// ============================================================================
// Module Functions
// ============================================================================

/// Calculate the pairwise similarity matrix A.
#[pyfunction]
fn sym<'py>(py: Python<'py>, points: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let points = extract_points(points)?;
    let matrix = similarity_goal::<f64, _>(&points).map_err(to_py_error)?;
    matrix_to_pyarray(py, &matrix)
}

/// Calculate the diagonal degree matrix D.
#[pyfunction]
fn ddg<'py>(py: Python<'py>, points: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let points = extract_points(points)?;
    let matrix = degree_goal::<f64, _>(&points).map_err(to_py_error)?;
    matrix_to_pyarray(py, &matrix)
}

/// Calculate the normalized affinity matrix W.
#[pyfunction]
fn norm<'py>(py: Python<'py>, points: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let points = extract_points(points)?;
    let matrix = normalized_goal::<f64, _>(&points).map_err(to_py_error)?;
    matrix_to_pyarray(py, &matrix)
}

/// Execute the full SymNMF algorithm from a caller-supplied initial H.
#[pyfunction(name = "symnmf")]
fn factorize<'py>(
    py: Python<'py>,
    points: &Bound<'py, PyAny>,
    init_h: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let points = extract_points(points)?;
    let initial = Matrix::from_rows(&extract_points(init_h)?).map_err(to_py_error)?;

    let model = SymNmf::new()
        .clusters(initial.cols())
        .build()
        .map_err(to_py_error)?;
    let result = model
        .fit_with_initial(&points, &initial)
        .map_err(to_py_error)?;

    matrix_to_pyarray(py, &result.factors)
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn symnmf(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sym, m)?)?;
    m.add_function(wrap_pyfunction!(ddg, m)?)?;
    m.add_function(wrap_pyfunction!(norm, m)?)?;
    m.add_function(wrap_pyfunction!(factorize, m)?)?;
    Ok(())
}
