//! block_maxima::disjoint — maxima over non-overlapping blocks.
//!
//! Purpose
//! -------
//! Reduce a sample to one maximum per contiguous block of fixed size, the
//! classical "block maxima" input for GEV estimation.
//!
//! Key behaviors
//! -------------
//! - Partition `[0, n)` into `⌊n / b⌋` full blocks `[i·b, (i+1)·b)`.
//! - Append one extra maximum for the trailing partial block
//!   `[⌊n / b⌋·b, n)` when `b` does not divide `n`.
//! - Pre-size the output exactly; nothing is pushed after allocation.
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 ≤ b ≤ n`; enforced by `validate_block_size`.
//! - The input slice is never mutated or aliased by the output.
//! - NaN propagates into exactly the blocks that contain it.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the exact-division and remainder paths, a brute-force
//!   comparison, the `b = 1` identity, and every validation error.
//!   Property tests live in `tests/block_maxima_properties.rs`.

use crate::block_maxima::{
    errors::BlockResult,
    primitives::window_max,
    validation::{validate_block_size, validate_series},
};
use ndarray::Array1;
use tracing::debug;

/// Maxima over consecutive disjoint blocks of `block_size` observations.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample sequence of length `n ≥ 1`. NaN / ±∞ are allowed.
/// - `block_size`: `usize`
///   Block length `b` with `1 ≤ b ≤ n`.
///
/// Returns
/// -------
/// `BlockResult<Array1<f64>>`
///   - `Ok(maxima)` of length `⌊n / b⌋` when `b` divides `n`, otherwise
///     `⌊n / b⌋ + 1`, in ascending block order. The last element of the
///     latter case is the maximum of the trailing partial block.
///
/// Errors
/// ------
/// - `BlockError::EmptySeries` when `data` is empty.
/// - `BlockError::InvalidBlockSize` when `b == 0` or `b > n`.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::block_maxima::disjoint_block_maxima;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let maxima = disjoint_block_maxima(&x, 3).unwrap();
/// assert_eq!(maxima.to_vec(), vec![3.0, 6.0, 8.0]);
/// ```
pub fn disjoint_block_maxima(data: &[f64], block_size: usize) -> BlockResult<Array1<f64>> {
    validate_series(data)?;
    validate_block_size(data.len(), block_size)?;

    let chunks = data.chunks_exact(block_size);
    let remainder = chunks.remainder();
    let num_blocks = data.len() / block_size;
    let out_len = if remainder.is_empty() { num_blocks } else { num_blocks + 1 };
    debug!(
        n = data.len(),
        block_size,
        num_blocks,
        remainder = remainder.len(),
        "disjoint block maxima"
    );

    let mut maxima = Vec::with_capacity(out_len);
    maxima.extend(chunks.map(window_max));
    if !remainder.is_empty() {
        maxima.push(window_max(remainder));
    }

    Ok(Array1::from(maxima))
}
