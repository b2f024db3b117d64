//! block_maxima::primitives — addressing and reduction helpers.
//!
//! Purpose
//! -------
//! Hold the small building blocks the maxima routines are assembled from:
//! an inclusive index range, a constant fill, and the window maximum with
//! the crate's NaN rule.
//!
//! Conventions
//! -----------
//! - NaN propagates: the maximum of a window containing NaN is NaN. ±∞
//!   follow IEEE ordering. [`dominates`] is the single comparison every
//!   kernel in this subtree uses, so disjoint, sliding, and k-block results
//!   agree on non-finite input.
//! - The engine itself slices with half-open bounds; [`index_range`] is
//!   kept for callers that want explicit index vectors.
//! - Likewise the k-block engine fills a short tail in place in its output
//!   buffer; [`fill_constant`] is kept for callers that want the broadcast
//!   as an owned array.

use crate::block_maxima::errors::{BlockError, BlockResult};
use ndarray::Array1;

/// Inclusive index sequence `[start, start + 1, ..., end]`.
///
/// Returns an empty vector when `start > end`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::block_maxima::primitives::index_range;
/// assert_eq!(index_range(2, 5), vec![2, 3, 4, 5]);
/// assert!(index_range(5, 2).is_empty());
/// ```
pub fn index_range(start: usize, end: usize) -> Vec<usize> {
    if start > end {
        return Vec::new();
    }
    (start..=end).collect()
}

/// `count` copies of `value`.
///
/// Exposed for callers; `k_block_sliding_maxima` writes the same broadcast
/// directly into its output slice.
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::block_maxima::fill_constant;
/// assert_eq!(fill_constant(7.0, 3).to_vec(), vec![7.0, 7.0, 7.0]);
/// assert!(fill_constant(7.0, 0).is_empty());
/// ```
pub fn fill_constant(value: f64, count: usize) -> Array1<f64> {
    Array1::from_elem(count, value)
}

/// `true` when `candidate` is at least as large as `incumbent` under the
/// NaN-propagating order (NaN ranks above every number, ties dominate).
#[inline(always)]
pub(crate) fn dominates(candidate: f64, incumbent: f64) -> bool {
    candidate.is_nan() || (!incumbent.is_nan() && candidate >= incumbent)
}

/// Maximum of a non-empty slice under the NaN-propagating order.
///
/// Callers guarantee `window` is non-empty.
#[inline]
pub(crate) fn window_max(window: &[f64]) -> f64 {
    let mut best = window[0];
    for &value in &window[1..] {
        if best.is_nan() {
            break;
        }
        if dominates(value, best) {
            best = value;
        }
    }
    best
}

/// Maximum of `window`, NaN-propagating.
///
/// Errors
/// ------
/// - `BlockError::EmptyWindow` when `window` is empty.
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::block_maxima::primitives::block_max;
/// assert_eq!(block_max(&[1.0, 4.0, -2.0]).unwrap(), 4.0);
/// assert!(block_max(&[1.0, f64::NAN]).unwrap().is_nan());
/// assert!(block_max(&[]).is_err());
/// ```
pub fn block_max(window: &[f64]) -> BlockResult<f64> {
    if window.is_empty() {
        return Err(BlockError::EmptyWindow);
    }
    Ok(window_max(window))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `index_range` for ordinary, singleton, and reversed bounds.
    // - `fill_constant` for zero and positive counts.
    // - The NaN / infinity rule in `dominates`, `window_max`, and `block_max`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the inclusive range and the reversed-bounds guard.
    //
    // Given
    // -----
    // - Bounds (0, 3), (4, 4), and (3, 1).
    //
    // Expect
    // ------
    // - `[0, 1, 2, 3]`, `[4]`, and `[]` respectively.
    fn index_range_is_inclusive_and_empty_when_reversed() {
        assert_eq!(index_range(0, 3), vec![0, 1, 2, 3]);
        assert_eq!(index_range(4, 4), vec![4]);
        assert!(index_range(3, 1).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify constant fill length and contents.
    //
    // Given
    // -----
    // - `fill_constant(2.5, 4)` and `fill_constant(1.0, 0)`.
    //
    // Expect
    // ------
    // - Four copies of 2.5, and an empty array.
    fn fill_constant_repeats_value() {
        let filled = fill_constant(2.5, 4);
        assert_eq!(filled.len(), 4);
        assert!(filled.iter().all(|&v| v == 2.5));
        assert!(fill_constant(1.0, 0).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Ensure NaN propagates regardless of its position in the window.
    //
    // Given
    // -----
    // - NaN at the front, middle, and end of a three-element window.
    //
    // Expect
    // ------
    // - `window_max` is NaN in all three cases.
    fn window_max_propagates_nan_from_any_position() {
        let nan = f64::NAN;
        for window in [[nan, 1.0, 2.0], [1.0, nan, 2.0], [1.0, 2.0, nan]] {
            assert!(window_max(&window).is_nan(), "window {window:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Check that infinities follow IEEE ordering.
    //
    // Given
    // -----
    // - `[-∞, -1.0]` and `[3.0, +∞, 4.0]`.
    //
    // Expect
    // ------
    // - Maxima `-1.0` and `+∞`.
    fn window_max_orders_infinities() {
        assert_eq!(window_max(&[f64::NEG_INFINITY, -1.0]), -1.0);
        assert_eq!(window_max(&[3.0, f64::INFINITY, 4.0]), f64::INFINITY);
    }

    #[test]
    // Purpose
    // -------
    // Verify the comparison used by the deque kernel.
    //
    // Given
    // -----
    // - Pairs covering ties, NaN candidate, and NaN incumbent.
    //
    // Expect
    // ------
    // - Ties and NaN candidates dominate; numbers never dominate NaN.
    fn dominates_ranks_nan_on_top() {
        assert!(dominates(2.0, 2.0));
        assert!(dominates(3.0, 2.0));
        assert!(!dominates(1.0, 2.0));
        assert!(dominates(f64::NAN, f64::INFINITY));
        assert!(!dominates(f64::INFINITY, f64::NAN));
    }

    #[test]
    // Purpose
    // -------
    // Ensure the public reduction rejects an empty window.
    //
    // Given
    // -----
    // - An empty slice.
    //
    // Expect
    // ------
    // - `Err(BlockError::EmptyWindow)`.
    fn block_max_rejects_empty_window() {
        assert_eq!(block_max(&[]), Err(BlockError::EmptyWindow));
    }
}
