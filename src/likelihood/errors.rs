//! Errors for GEV cost evaluation and frequency tables.
//!
//! This module defines [`GevError`], the error type of the `likelihood`
//! subtree, and the [`GevResult`] alias. Inadmissible parameters or data
//! outside the GEV support are *not* errors: the evaluators return the
//! finite penalty cost instead so that a downstream optimizer can keep
//! searching. Errors are reserved for structural misuse (wrong θ length,
//! malformed tables, unparsable labels).
//!
//! ## Conventions
//! - Indices are 0-based positions in the offending input.
//! - `statrs` distribution construction errors are normalized to
//!   [`GevError::Distribution`] with the `statrs` message preserved.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};
use statrs::distribution::GumbelError;

/// Result alias for the `likelihood` subtree.
pub type GevResult<T> = Result<T, GevError>;

/// Unified error type for GEV costs and frequency tables.
#[derive(Debug, Clone, PartialEq)]
pub enum GevError {
    // ---- Parameter vectors ----
    /// θ must hold exactly (mu, sigma, gamma).
    InvalidThetaLength { expected: usize, actual: usize },

    // ---- Frequency tables ----
    /// Table has no entries.
    EmptyTable,

    /// Values and counts differ in length.
    LengthMismatch { values: usize, counts: usize },

    /// A tabulated value is NaN/±inf.
    NonFiniteValue { index: usize, value: f64 },

    /// A count is negative or non-finite.
    InvalidCount { index: usize, count: f64 },

    /// All counts are zero.
    ZeroTotalCount,

    /// A value label does not parse as a number.
    InvalidLabel { index: usize, label: String },

    /// Sample variance needs a total count above one.
    InsufficientCount { total: f64 },

    // ---- statrs ----
    /// Wrapper for statrs distribution construction errors.
    Distribution { reason: String },
}

impl std::error::Error for GevError {}

impl std::fmt::Display for GevError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GevError::InvalidThetaLength { expected, actual } => {
                write!(f, "Parameter vector must have length {expected}; got: {actual}.")
            }
            GevError::EmptyTable => write!(f, "Frequency table is empty."),
            GevError::LengthMismatch { values, counts } => {
                write!(f, "Frequency table has {values} values but {counts} counts.")
            }
            GevError::NonFiniteValue { index, value } => {
                write!(f, "Value at index {index} is non-finite: {value}")
            }
            GevError::InvalidCount { index, count } => {
                write!(f, "Count at index {index} must be finite and ≥ 0; got: {count}")
            }
            GevError::ZeroTotalCount => write!(f, "Frequency table counts sum to zero."),
            GevError::InvalidLabel { index, label } => {
                write!(f, "Label at index {index} is not a number: {label:?}")
            }
            GevError::InsufficientCount { total } => {
                write!(f, "Sample variance needs a total count above 1; got: {total}")
            }
            GevError::Distribution { reason } => write!(f, "Distribution error: {reason}"),
        }
    }
}

impl From<GumbelError> for GevError {
    fn from(err: GumbelError) -> Self {
        GevError::Distribution { reason: err.to_string() }
    }
}

#[cfg(feature = "python-bindings")]
impl From<GevError> for PyErr {
    fn from(err: GevError) -> PyErr {
        PyValueError::new_err(format!("GevError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Payload embedding in `Display` for the table and θ variants.
    // - The statrs conversion path.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the θ-length message reports expected and actual lengths.
    //
    // Given
    // -----
    // - `InvalidThetaLength { expected: 3, actual: 2 }`.
    //
    // Expect
    // ------
    // - The message contains "3" and "2".
    fn gev_error_theta_length_includes_payload() {
        let msg = GevError::InvalidThetaLength { expected: 3, actual: 2 }.to_string();
        assert!(msg.contains('3') && msg.contains('2'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that a rejected label is quoted in the message.
    //
    // Given
    // -----
    // - `InvalidLabel { index: 4, label: "abc" }`.
    //
    // Expect
    // ------
    // - The message contains "index 4" and "\"abc\"".
    fn gev_error_invalid_label_quotes_label() {
        let err = GevError::InvalidLabel { index: 4, label: "abc".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("index 4") && msg.contains("\"abc\""), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure a statrs Gumbel construction failure maps to `Distribution`.
    //
    // Given
    // -----
    // - `Gumbel::new(0.0, -1.0)`, which statrs rejects.
    //
    // Expect
    // ------
    // - `GevError::Distribution` with a non-empty reason.
    fn gev_error_from_gumbel_error_keeps_reason() {
        let err: GevError = statrs::distribution::Gumbel::new(0.0, -1.0).unwrap_err().into();
        match err {
            GevError::Distribution { reason } => assert!(!reason.is_empty()),
            other => panic!("expected Distribution, got {other:?}"),
        }
    }
}
