//! rust_extremes — windowed maxima and GEV cost evaluation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the maxima engine and the GEV likelihood evaluators to Python via the
//! `_rust_extremes` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing functions and submodules
//! used by the `rust_extremes` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`block_maxima` and `likelihood`) as the
//!   public crate surface.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_extremes` Python extension.
//! - Create and register Python submodules (`block_maxima`, `likelihood`)
//!   under `rust_extremes` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Window sizes arrive from Python as non-negative integers; zero and
//!   oversized windows are rejected by the core validation and surface as
//!   `ValueError`.
//!
//! Conventions
//! -----------
//! - Python-exposed functions live under `_rust_extremes.<submodule>` and keep
//!   the names of their Rust counterparts.
//! - Series are 0-based on both sides of the boundary; maxima come back as
//!   `numpy.ndarray[float64]`.
//! - Errors from core Rust code ([`block_maxima::BlockError`],
//!   [`likelihood::GevError`]) are converted to `PyErr` at the boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`block_maxima`] and
//!   [`likelihood`] and can ignore the items behind `python-bindings`.
//! - The Python layer typically passes `likelihood.gev_neg_log_likelihood`
//!   (or its table variant) as the objective of a generic optimizer.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules, property
//!   tests in `tests/block_maxima_properties.rs`, and the end-to-end test in
//!   `tests/integration_maxima_pipeline.rs`.

pub mod block_maxima;
pub mod likelihood;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    block_maxima::{
        disjoint_block_maxima, k_block_sliding_maxima_with, sliding_maxima,
    },
    likelihood::{
        GevParams, gev_neg_log_likelihood, gev_neg_log_likelihood_table,
    },
    utils::{extract_frequency_table, extract_kblock_options, with_f64_slice},
};

/// disjoint_block_maxima — maxima of consecutive non-overlapping blocks.
///
/// Parameters
/// ----------
/// Called from Python as `disjoint_block_maxima(data, block_size)`:
/// - `data`: array-like of `float64`, length ≥ 1.
/// - `block_size`: `int` in `[1, len(data)]`.
///
/// Returns
/// -------
/// `numpy.ndarray[float64]` of length `⌈len(data) / block_size⌉`; the last
/// entry covers the (possibly shorter) remainder block.
///
/// Errors
/// ------
/// - `ValueError` for an empty series or an out-of-range block size.
/// - `TypeError` if `data` cannot be read as a 1-D `float64` array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "disjoint_block_maxima", signature = (data, block_size))]
fn py_disjoint_block_maxima<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, block_size: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let maxima = with_f64_slice(py, data, |x| Ok(disjoint_block_maxima(x, block_size)?))?;
    Ok(maxima.into_pyarray(py))
}

/// sliding_maxima — circular sliding-window maxima.
///
/// Called from Python as `sliding_maxima(data, width)`; returns one maximum
/// per start index, with windows near the end wrapping to the front.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "sliding_maxima", signature = (data, width))]
fn py_sliding_maxima<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, width: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let maxima = with_f64_slice(py, data, |x| Ok(sliding_maxima(x, width)?))?;
    Ok(maxima.into_pyarray(py))
}

/// k_block_sliding_maxima — circular sliding maxima within super-blocks.
///
/// Parameters
/// ----------
/// Called from Python as
/// `k_block_sliding_maxima(sample, width, k, execution=None)`:
/// - `sample`: array-like of `float64`.
/// - `width`: `int`, the window width `r`.
/// - `k`: `int`, windows per super-block; requires `1 < k < len // width`.
/// - `execution`: `"serial"` (default) or `"parallel"`.
///
/// Returns
/// -------
/// `numpy.ndarray[float64]` with the same length as `sample`.
///
/// Errors
/// ------
/// - `ValueError` for invalid `width`, `k`, or `execution`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "k_block_sliding_maxima", signature = (sample, width, k, execution = None))]
fn py_k_block_sliding_maxima<'py>(
    py: Python<'py>, sample: &Bound<'py, PyAny>, width: usize, k: usize,
    execution: Option<&str>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let options = extract_kblock_options(execution)?;
    let maxima =
        with_f64_slice(py, sample, |x| Ok(k_block_sliding_maxima_with(x, width, k, &options)?))?;
    Ok(maxima.into_pyarray(py))
}

/// gev_neg_log_likelihood — GEV cost of a maxima sample at `theta = (μ, σ, γ)`.
///
/// Returns the penalty cost `1e10` instead of raising when `theta` is
/// inadmissible or the data falls outside the support, so the function can
/// be handed directly to a numerical optimizer.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "gev_neg_log_likelihood", signature = (theta, data))]
fn py_gev_neg_log_likelihood<'py>(
    py: Python<'py>, theta: &Bound<'py, PyAny>, data: &Bound<'py, PyAny>,
) -> PyResult<f64> {
    let params = with_f64_slice(py, theta, |t| Ok(GevParams::from_theta(t)?))?;
    with_f64_slice(py, data, |x| Ok(gev_neg_log_likelihood(&params, x)?))
}

/// gev_neg_log_likelihood_table — count-weighted GEV cost of a frequency table.
///
/// `values` may be numeric or numeric strings (the names of a tabulated
/// sample); `counts` must match its length. Entries outside the support
/// add `count * 1e10` to the cost.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "gev_neg_log_likelihood_table", signature = (theta, values, counts))]
fn py_gev_neg_log_likelihood_table<'py>(
    py: Python<'py>, theta: &Bound<'py, PyAny>, values: &Bound<'py, PyAny>,
    counts: &Bound<'py, PyAny>,
) -> PyResult<f64> {
    let params = with_f64_slice(py, theta, |t| Ok(GevParams::from_theta(t)?))?;
    let table = extract_frequency_table(py, values, counts)?;
    Ok(gev_neg_log_likelihood_table(&params, &table)?)
}

/// table_mean — count-weighted mean of a frequency table.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "table_mean", signature = (values, counts))]
fn py_table_mean<'py>(
    py: Python<'py>, values: &Bound<'py, PyAny>, counts: &Bound<'py, PyAny>,
) -> PyResult<f64> {
    Ok(extract_frequency_table(py, values, counts)?.mean())
}

/// table_variance — count-weighted sample variance (denominator `N - 1`).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "table_variance", signature = (values, counts))]
fn py_table_variance<'py>(
    py: Python<'py>, values: &Bound<'py, PyAny>, counts: &Bound<'py, PyAny>,
) -> PyResult<f64> {
    Ok(extract_frequency_table(py, values, counts)?.variance()?)
}

/// _rust_extremes — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_extremes` Python module and register the `block_maxima`
/// and `likelihood` submodules used by the public `rust_extremes` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - Invoked by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_extremes<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let block_maxima_mod = PyModule::new(py, "block_maxima")?;
    let likelihood_mod = PyModule::new(py, "likelihood")?;
    block_maxima_module(m, &block_maxima_mod)?;
    likelihood_module(m, &likelihood_mod)?;

    // Register submodules in sys.modules so dotted imports resolve.
    let modules = py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_extremes.block_maxima", block_maxima_mod)?;
    modules.set_item("rust_extremes.likelihood", likelihood_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn block_maxima_module<'py>(
    parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_disjoint_block_maxima, m)?)?;
    m.add_function(wrap_pyfunction!(py_sliding_maxima, m)?)?;
    m.add_function(wrap_pyfunction!(py_k_block_sliding_maxima, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn likelihood_module<'py>(
    parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_gev_neg_log_likelihood, m)?)?;
    m.add_function(wrap_pyfunction!(py_gev_neg_log_likelihood_table, m)?)?;
    m.add_function(wrap_pyfunction!(py_table_mean, m)?)?;
    m.add_function(wrap_pyfunction!(py_table_variance, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}
