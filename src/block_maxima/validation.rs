//! block_maxima::validation — shared input guards for the maxima engine.
//!
//! Purpose
//! -------
//! Centralize the argument checks used by the disjoint, sliding, and k-block
//! routines so that each public entry point validates once, up front, and
//! the inner kernels can index without further bounds reasoning.
//!
//! Key behaviors
//! -------------
//! - Reject empty series before any window geometry is computed.
//! - Enforce `1 ≤ block_size ≤ n` and `1 ≤ r ≤ n`.
//! - Enforce the k-block regime `1 < k < m`, `m = ⌊n / r⌋`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data values are *not* inspected: NaN and ±∞ are legal inputs and are
//!   handled by the reduction rule in `primitives`.
//! - Sizes are never clamped; a violation is always an error.
//!
//! Downstream usage
//! ----------------
//! - Call the matching guard at the top of each public routine and rely on
//!   `Ok(())` as a guarantee for the index arithmetic that follows.

use crate::block_maxima::errors::{BlockError, BlockResult};

/// Reject an empty input series.
///
/// Errors
/// ------
/// - `BlockError::EmptySeries` when `data.is_empty()`.
pub fn validate_series(data: &[f64]) -> BlockResult<()> {
    if data.is_empty() {
        return Err(BlockError::EmptySeries);
    }
    Ok(())
}

/// Validate a disjoint block size against a series of length `len`.
///
/// Errors
/// ------
/// - `BlockError::InvalidBlockSize` when `block_size == 0` or
///   `block_size > len`.
pub fn validate_block_size(len: usize, block_size: usize) -> BlockResult<()> {
    if block_size == 0 || block_size > len {
        return Err(BlockError::InvalidBlockSize { block_size, len });
    }
    Ok(())
}

/// Validate a sliding-window width against a series of length `len`.
///
/// Errors
/// ------
/// - `BlockError::InvalidWindow` when `width == 0` or `width > len`.
pub fn validate_window(len: usize, width: usize) -> BlockResult<()> {
    if width == 0 || width > len {
        return Err(BlockError::InvalidWindow { width, len });
    }
    Ok(())
}

/// Validate the super-block factor `k` for the hybrid k-block engine.
///
/// Parameters
/// ----------
/// - `len`: `usize`
///   Length `n` of the full series.
/// - `width`: `usize`
///   Window width `r`; must already satisfy `1 ≤ r ≤ n`.
/// - `k`: `usize`
///   Number of `r`-windows per super-block.
///
/// Returns
/// -------
/// `BlockResult<usize>`
///   - `Ok(m)` with `m = ⌊n / r⌋`, the number of disjoint `r`-windows, when
///     `1 < k < m`.
///   - `Err(BlockError::InvalidSuperBlockFactor { k, max_windows: m })`
///     otherwise.
///
/// Notes
/// -----
/// - `k < m` implies `k * r < n`, so at least one complete super-block and a
///   non-empty tail or second super-block always exist.
pub fn validate_super_block_factor(len: usize, width: usize, k: usize) -> BlockResult<usize> {
    validate_window(len, width)?;
    let max_windows = len / width;
    if k <= 1 || k >= max_windows {
        return Err(BlockError::InvalidSuperBlockFactor { k, max_windows });
    }
    Ok(max_windows)
}
