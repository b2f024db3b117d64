//! block_maxima::kblock — hybrid k-block sliding maxima.
//!
//! Purpose
//! -------
//! Produce a sliding-maximum series of the same length as the sample while
//! confining every window to a super-block of `k·r` observations. This is
//! the "k-max" sample used for sliding-block GEV estimation: it keeps most
//! of the information of the full sliding-maxima series while bounding how
//! far wrap-around can reach.
//!
//! Key behaviors
//! -------------
//! - Split `[0, n)` into `mk = ⌊n / (k·r)⌋` complete super-blocks and a tail
//!   of `n - mk·k·r` observations.
//! - Run the circular sliding maximum of width `r` on each super-block in
//!   isolation and write it to the same positions of the output.
//! - Treat the tail by its length relative to `r`:
//!   - empty: nothing to do;
//!   - shorter than `r`: broadcast the tail maximum to every tail position;
//!   - at least `r`: circular sliding maximum on the tail alone.
//! - Optionally fan complete super-blocks out over rayon
//!   ([`Execution::Parallel`]); they read and write disjoint slices.
//!
//! Invariants & assumptions
//! ------------------------
//! - `1 ≤ r ≤ n` and `1 < k < m` with `m = ⌊n / r⌋`; enforced by
//!   `validate_super_block_factor`. Together these give `mk ≥ 1`.
//! - Output length is always `n`.
//! - No window ever wraps across a super-block or tail boundary.
//! - With NaN-free input every output is ≥ the input at the same position.
//! - Output is *not* monotone in `r` for fixed `k`: the super-block length
//!   `k·r` moves with `r`, and so do the block boundaries and wrap points.
//!   With `x = [9, 0, ..., 0]` (n = 24) and `k = 2`, position 3 is 9 for
//!   `r = 2` and 0 for `r = 3`. Only [`sliding_maxima`](crate::block_maxima::sliding_maxima)
//!   is monotone in its width.
//!
//! Conventions
//! -----------
//! - Emits one `debug!` event per call with the block geometry and the tail
//!   policy chosen, and a `trace!` per super-block. No subscriber is
//!   installed here.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the three tail cases (including the `r - 1` / `r`
//!   boundary), isolation of super-blocks from each other, serial vs.
//!   parallel agreement, and the precondition errors.

use crate::block_maxima::{
    errors::BlockResult,
    options::{Execution, KBlockOptions},
    primitives::window_max,
    sliding::sliding_maxima_into,
    validation::{validate_series, validate_super_block_factor},
};
use ndarray::Array1;
use rayon::prelude::*;
use tracing::{debug, trace};

/// How the trailing partial super-block is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailPolicy {
    /// `n` is a multiple of `k·r`; there is no tail.
    Empty,
    /// `0 < tail < r`: the tail maximum is repeated over the tail.
    Broadcast,
    /// `tail ≥ r`: circular sliding maxima within the tail.
    Sliding,
}

impl TailPolicy {
    pub fn for_tail(tail_len: usize, width: usize) -> Self {
        if tail_len == 0 {
            TailPolicy::Empty
        } else if tail_len < width {
            TailPolicy::Broadcast
        } else {
            TailPolicy::Sliding
        }
    }
}

/// Hybrid k-block sliding maxima with default (serial) options.
///
/// See [`k_block_sliding_maxima_with`] for parameters, errors, and
/// semantics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::block_maxima::k_block_sliding_maxima;
/// // r = 2, k = 2: super-blocks of 4, tail of 1 (< r, broadcast).
/// let x = [1.0, 0.0, 0.0, 0.0, 9.0, 0.0, 0.0, 0.0, 4.0];
/// let maxima = k_block_sliding_maxima(&x, 2, 2).unwrap();
/// assert_eq!(maxima.to_vec(), vec![1.0, 0.0, 0.0, 1.0, 9.0, 0.0, 0.0, 9.0, 4.0]);
/// ```
pub fn k_block_sliding_maxima(sample: &[f64], width: usize, k: usize) -> BlockResult<Array1<f64>> {
    k_block_sliding_maxima_with(sample, width, k, &KBlockOptions::default())
}

/// Hybrid k-block sliding maxima.
///
/// Parameters
/// ----------
/// - `sample`: `&[f64]`
///   Sample sequence of length `n ≥ 1`. NaN / ±∞ are allowed and propagate
///   within their windows.
/// - `width`: `usize`
///   Sliding-window width `r`, `1 ≤ r ≤ n`.
/// - `k`: `usize`
///   Number of `r`-windows per super-block; must satisfy `1 < k < ⌊n / r⌋`.
/// - `options`: `&KBlockOptions`
///   Execution policy for the complete super-blocks.
///
/// Returns
/// -------
/// `BlockResult<Array1<f64>>`
///   - `Ok(maxima)` of length `n`. Positions inside complete super-blocks
///     and inside a tail of length ≥ `r` hold circular sliding maxima local
///     to their block; a tail shorter than `r` holds its own maximum at every
///     position.
///
/// Errors
/// ------
/// - `BlockError::EmptySeries` when `sample` is empty.
/// - `BlockError::InvalidWindow` when `r == 0` or `r > n`.
/// - `BlockError::InvalidSuperBlockFactor` when `k ≤ 1` or `k ≥ ⌊n / r⌋`.
///
/// Panics
/// ------
/// - Never panics on user input.
///
/// Notes
/// -----
/// - Serial and parallel execution produce bit-identical results; the only
///   difference is scheduling of the complete super-blocks.
pub fn k_block_sliding_maxima_with(
    sample: &[f64], width: usize, k: usize, options: &KBlockOptions,
) -> BlockResult<Array1<f64>> {
    validate_series(sample)?;
    let max_windows = validate_super_block_factor(sample.len(), width, k)?;

    let n = sample.len();
    let super_block = k * width;
    let num_super_blocks = n / super_block;
    let body_len = num_super_blocks * super_block;
    let policy = TailPolicy::for_tail(n - body_len, width);
    debug!(
        n,
        width,
        k,
        max_windows,
        num_super_blocks,
        tail = n - body_len,
        ?policy,
        execution = ?options.execution,
        "k-block sliding maxima"
    );

    let (body, tail) = sample.split_at(body_len);
    let mut out = vec![0.0; n];
    let (out_body, out_tail) = out.split_at_mut(body_len);

    match options.execution {
        Execution::Serial => {
            out_body
                .chunks_exact_mut(super_block)
                .zip(body.chunks_exact(super_block))
                .enumerate()
                .for_each(|(block, (dst, src))| {
                    trace!(block, "super-block");
                    sliding_maxima_into(src, width, dst);
                });
        }
        Execution::Parallel => {
            out_body
                .par_chunks_exact_mut(super_block)
                .zip(body.par_chunks_exact(super_block))
                .enumerate()
                .for_each(|(block, (dst, src))| {
                    trace!(block, "super-block");
                    sliding_maxima_into(src, width, dst);
                });
        }
    }

    match policy {
        TailPolicy::Empty => {}
        TailPolicy::Broadcast => out_tail.fill(window_max(tail)),
        TailPolicy::Sliding => sliding_maxima_into(tail, width, out_tail),
    }

    Ok(Array1::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_maxima::{errors::BlockError, sliding::sliding_maxima};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Tail policy selection at the 0, r - 1, r, and r + 1 boundaries.
    // - Isolation of super-blocks (no wrap across block boundaries).
    // - Serial and parallel agreement.
    // - Output length and the pointwise lower bound by the input.
    // - Non-monotonicity in r for fixed k.
    // - Precondition errors for k and r.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify tail policy selection around the window width.
    //
    // Given
    // -----
    // - `r = 3` with tail lengths 0, 2, 3, and 4.
    //
    // Expect
    // ------
    // - Empty, Broadcast, Sliding, Sliding.
    fn tail_policy_switches_at_window_width() {
        assert_eq!(TailPolicy::for_tail(0, 3), TailPolicy::Empty);
        assert_eq!(TailPolicy::for_tail(2, 3), TailPolicy::Broadcast);
        assert_eq!(TailPolicy::for_tail(3, 3), TailPolicy::Sliding);
        assert_eq!(TailPolicy::for_tail(4, 3), TailPolicy::Sliding);
    }

    #[test]
    // Purpose
    // -------
    // Ensure wrap-around stays inside each super-block.
    //
    // Given
    // -----
    // - `r = 2`, `k = 2` (super-blocks of 4), `n = 12`, no tail.
    // - Large values placed at the first position of the second block and
    //   the last position of the third block.
    //
    // Expect
    // ------
    // - The last window of block 0 wraps to x[0] = 1, not x[4] = 9.
    // - The result differs from whole-series sliding maxima at that position.
    fn k_block_sliding_maxima_does_not_wrap_across_super_blocks() {
        // Arrange
        let x = [1.0, 0.0, 0.0, 0.0, 9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0];

        // Act
        let maxima = k_block_sliding_maxima(&x, 2, 2).unwrap();
        let whole = sliding_maxima(&x, 2).unwrap();

        // Assert
        assert_eq!(
            maxima.to_vec(),
            vec![1.0, 0.0, 0.0, 1.0, 9.0, 0.0, 0.0, 9.0, 0.0, 0.0, 5.0, 5.0]
        );
        assert_eq!(whole[3], 9.0);
    }

    #[test]
    // Purpose
    // -------
    // Check the broadcast policy when the tail is exactly `r - 1` long.
    //
    // Given
    // -----
    // - `r = 3`, `k = 2` (super-blocks of 6), `n = 14`, tail `[4, 7]`.
    //
    // Expect
    // ------
    // - Both tail positions hold 7.
    // - The two complete super-blocks hold their own circular maxima.
    fn k_block_sliding_maxima_broadcasts_tail_shorter_than_width() {
        // Arrange
        let x = [
            3.0, 1.0, 2.0, 0.0, 0.0, 5.0, //
            1.0, 1.0, 8.0, 1.0, 1.0, 1.0, //
            4.0, 7.0,
        ];

        // Act
        let maxima = k_block_sliding_maxima(&x, 3, 2).unwrap();

        // Assert
        assert_eq!(&maxima.to_vec()[12..], &[7.0, 7.0]);
        assert_eq!(&maxima.to_vec()[..6], sliding_maxima(&x[..6], 3).unwrap().as_slice().unwrap());
        assert_eq!(&maxima.to_vec()[6..12], sliding_maxima(&x[6..12], 3).unwrap().as_slice().unwrap());
    }

    #[test]
    // Purpose
    // -------
    // Check the sliding policy when the tail is exactly `r` long.
    //
    // Given
    // -----
    // - `r = 3`, `k = 2`, `n = 15`, tail `[2, 9, 4]`.
    //
    // Expect
    // ------
    // - The tail equals `sliding_maxima(tail, 3)`; with tail length r the
    //   circular windows each span the whole tail, so all three are 9.
    fn k_block_sliding_maxima_slides_tail_of_exactly_width() {
        // Arrange
        let mut x = vec![0.0; 12];
        x.extend_from_slice(&[2.0, 9.0, 4.0]);

        // Act
        let maxima = k_block_sliding_maxima(&x, 3, 2).unwrap();

        // Assert
        let tail = sliding_maxima(&x[12..], 3).unwrap();
        assert_eq!(&maxima.to_vec()[12..], tail.as_slice().unwrap());
        assert_eq!(&maxima.to_vec()[12..], &[9.0, 9.0, 9.0]);
    }

    #[test]
    // Purpose
    // -------
    // Show that a tail longer than `r` gets genuine (non-constant) sliding
    // maxima rather than a broadcast.
    //
    // Given
    // -----
    // - `r = 2`, `k = 2`, `n = 11`, tail `[5, 1, 3]`.
    //
    // Expect
    // ------
    // - Tail maxima `[5, 3, 5]` (last window wraps to the tail's first
    //   element), not `[5, 5, 5]`.
    fn k_block_sliding_maxima_slides_tail_longer_than_width() {
        let mut x = vec![0.0; 8];
        x.extend_from_slice(&[5.0, 1.0, 3.0]);
        let maxima = k_block_sliding_maxima(&x, 2, 2).unwrap();
        assert_eq!(&maxima.to_vec()[8..], &[5.0, 3.0, 5.0]);
    }

    #[test]
    // Purpose
    // -------
    // Pin that growing `r` with `k` fixed can lower an output, because the
    // super-block boundaries move with `k·r`.
    //
    // Given
    // -----
    // - `x = [9, 0 × 23]`, `k = 2`, widths `r = 2` and `r = 3`.
    //
    // Expect
    // ------
    // - `r = 2`: block `[9, 0, 0, 0]` wraps at position 3, giving 9.
    // - `r = 3`: block `[9, 0, 0, 0, 0, 0]` wraps only at positions 4 and 5,
    //   so position 3 is 0.
    // - Plain sliding maxima stay monotone at the same position.
    fn k_block_sliding_maxima_is_not_monotone_in_width() {
        // Arrange
        let mut x = vec![0.0; 24];
        x[0] = 9.0;

        // Act
        let narrow = k_block_sliding_maxima(&x, 2, 2).unwrap();
        let wide = k_block_sliding_maxima(&x, 3, 2).unwrap();

        // Assert
        assert_eq!(&narrow.to_vec()[..4], &[9.0, 0.0, 0.0, 9.0]);
        assert_eq!(&wide.to_vec()[..6], &[9.0, 0.0, 0.0, 0.0, 9.0, 9.0]);
        assert!(wide[3] < narrow[3]);
        assert!(sliding_maxima(&x, 3).unwrap()[3] >= sliding_maxima(&x, 2).unwrap()[3]);
    }

    #[test]
    // Purpose
    // -------
    // Verify serial and parallel execution agree exactly.
    //
    // Given
    // -----
    // - A 203-element deterministic pseudo-random series, `r = 7`, `k = 3`.
    //
    // Expect
    // ------
    // - Identical outputs of length 203, each ≥ the input at its position.
    fn k_block_sliding_maxima_serial_and_parallel_agree() {
        // Arrange
        let x: Vec<f64> = (0..203).map(|i| ((i * 7919) % 101) as f64 - 50.0).collect();
        let parallel = KBlockOptions::new(Execution::Parallel);

        // Act
        let serial_out = k_block_sliding_maxima(&x, 7, 3).unwrap();
        let parallel_out = k_block_sliding_maxima_with(&x, 7, 3, &parallel).unwrap();

        // Assert
        assert_eq!(serial_out, parallel_out);
        assert_eq!(serial_out.len(), x.len());
        assert!(serial_out.iter().zip(&x).all(|(m, v)| m >= v));
    }

    #[test]
    // Purpose
    // -------
    // Cover the precondition errors.
    //
    // Given
    // -----
    // - `n = 10`, `r = 2` (so `m = 5`) with k = 1 and k = 5.
    // - `r = 11 > n`.
    // - An empty sample.
    //
    // Expect
    // ------
    // - `InvalidSuperBlockFactor`, `InvalidWindow`, and `EmptySeries`.
    fn k_block_sliding_maxima_rejects_invalid_arguments() {
        let x = [0.0; 10];
        assert_eq!(
            k_block_sliding_maxima(&x, 2, 1),
            Err(BlockError::InvalidSuperBlockFactor { k: 1, max_windows: 5 })
        );
        assert_eq!(
            k_block_sliding_maxima(&x, 2, 5),
            Err(BlockError::InvalidSuperBlockFactor { k: 5, max_windows: 5 })
        );
        assert_eq!(
            k_block_sliding_maxima(&x, 11, 2),
            Err(BlockError::InvalidWindow { width: 11, len: 10 })
        );
        assert_eq!(k_block_sliding_maxima(&[], 1, 2), Err(BlockError::EmptySeries));
    }
}
