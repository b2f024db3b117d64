//! Python-boundary helpers shared by the PyO3 bindings in the crate root.
#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{block_maxima::KBlockOptions, likelihood::FrequencyTable};

/// Borrow a contiguous `float64` view of a numpy array, pandas Series, or
/// plain Python sequence, copying only when the input is not already a
/// contiguous `float64` array.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Run `f` on the extracted series as a slice.
#[cfg(feature = "python-bindings")]
pub fn with_f64_slice<'py, T>(
    py: Python<'py>, raw: &Bound<'py, PyAny>, f: impl FnOnce(&[f64]) -> PyResult<T>,
) -> PyResult<T> {
    let arr = extract_f64_array(py, raw)?;
    let data = arr.as_slice().map_err(|_| {
        PyTypeError::new_err("data must be a 1-D contiguous float64 array or sequence")
    })?;
    f(data)
}

#[cfg(feature = "python-bindings")]
pub fn extract_kblock_options(execution: Option<&str>) -> PyResult<KBlockOptions> {
    Ok(KBlockOptions::from_name(execution)?)
}

/// Build a [`FrequencyTable`] from Python `values` and `counts`; `values`
/// may be numbers or numeric strings (e.g. the names of an R-style table).
#[cfg(feature = "python-bindings")]
pub fn extract_frequency_table<'py>(
    py: Python<'py>, values: &Bound<'py, PyAny>, counts: &Bound<'py, PyAny>,
) -> PyResult<FrequencyTable> {
    let counts: Vec<f64> = with_f64_slice(py, counts, |c| Ok(c.to_vec()))?;
    if let Ok(labels) = values.extract::<Vec<String>>() {
        return Ok(FrequencyTable::from_labels(&labels, &counts)?);
    }
    let values: Vec<f64> = with_f64_slice(py, values, |v| Ok(v.to_vec()))?;
    Ok(FrequencyTable::new(values, counts)?)
}
