//! block_maxima::sliding — circular sliding-window maxima.
//!
//! Purpose
//! -------
//! Compute, for every start position of a sequence, the maximum of the `r`
//! consecutive observations beginning there, continuing from the front of
//! the sequence once a window runs past its end. This is the primitive the
//! k-block engine applies to each super-block.
//!
//! Key behaviors
//! -------------
//! - Output position `i` holds `max(x[i], x[(i+1) mod n], …, x[(i+r-1) mod n])`,
//!   which equals the window `[i, i+r-1]` of the extended sequence
//!   `x ++ x[0..r-1]`.
//! - Runs a monotone deque over the *virtual* indices `0..n+r-1` and reads
//!   values through `j mod n`; the extended sequence is never materialized.
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 ≤ r ≤ n`; validated by [`sliding_maxima`] and guaranteed by callers
//!   of the crate-internal [`sliding_maxima_into`].
//! - Output length equals input length.
//! - Wrap-around only ever reaches back into the slice passed in; the
//!   k-block engine relies on this to keep super-blocks independent.
//!
//! Performance
//! -----------
//! - O(n + r) time, O(r) extra memory for the deque.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against an explicit extended-copy reference, and
//!   check the `r = 1`, `r = n`, reference-example, and NaN cases.

use crate::block_maxima::{
    deque::MaxDeque,
    errors::BlockResult,
    validation::{validate_series, validate_window},
};
use ndarray::Array1;
use tracing::debug;

/// Circular sliding maxima of width `width`.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sequence of length `n ≥ 1`. NaN / ±∞ are allowed.
/// - `width`: `usize`
///   Window width `r` with `1 ≤ r ≤ n`.
///
/// Returns
/// -------
/// `BlockResult<Array1<f64>>`
///   - `Ok(maxima)` of length `n`; the last `r - 1` windows wrap to the start.
///
/// Errors
/// ------
/// - `BlockError::EmptySeries` when `data` is empty.
/// - `BlockError::InvalidWindow` when `r == 0` or `r > n`.
///
/// Notes
/// -----
/// - `r = 1` reproduces `data`; `r = n` yields the global maximum at every
///   position.
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::block_maxima::sliding_maxima;
/// let maxima = sliding_maxima(&[1.0, 5.0, 2.0, 8.0, 3.0], 2).unwrap();
/// assert_eq!(maxima.to_vec(), vec![5.0, 5.0, 8.0, 8.0, 3.0]);
/// ```
pub fn sliding_maxima(data: &[f64], width: usize) -> BlockResult<Array1<f64>> {
    validate_series(data)?;
    validate_window(data.len(), width)?;
    debug!(n = data.len(), width, "circular sliding maxima");

    let mut out = vec![0.0; data.len()];
    sliding_maxima_into(data, width, &mut out);
    Ok(Array1::from(out))
}

/// Write the circular sliding maxima of `src` into `dst`.
///
/// Requires `1 ≤ width ≤ src.len()` and `dst.len() == src.len()`.
pub(crate) fn sliding_maxima_into(src: &[f64], width: usize, dst: &mut [f64]) {
    let len = src.len();
    debug_assert!(width >= 1 && width <= len, "window width out of range");
    debug_assert_eq!(dst.len(), len);

    let mut deque = MaxDeque::with_width(width);
    for j in 0..len + width - 1 {
        let start = (j + 1).saturating_sub(width);
        deque.expire(start);
        deque.push(j, src[j % len]);
        if j + 1 >= width {
            dst[start] = deque.front_value();
        }
    }
}
