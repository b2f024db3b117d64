//! block_maxima — windowed-maxima engine for extreme-value samples.
//!
//! Purpose
//! -------
//! Turn a long series of observations into the maxima samples consumed by
//! extreme-value estimation: disjoint block maxima, circular sliding maxima,
//! and the hybrid k-block sliding maxima that confine sliding windows to
//! super-blocks of `k·r` observations.
//!
//! Key behaviors
//! -------------
//! - [`disjoint_block_maxima`]: one maximum per block of `b` observations,
//!   plus one for a trailing partial block.
//! - [`sliding_maxima`]: one maximum per start position over `r`
//!   consecutive observations, wrapping to the front of the series.
//! - [`k_block_sliding_maxima`] / [`k_block_sliding_maxima_with`]: sliding
//!   maxima computed independently per super-block, with a
//!   broadcast-or-slide rule for the trailing partial super-block
//!   ([`TailPolicy`]) and optional rayon fan-out ([`KBlockOptions`]).
//! - Small helpers: [`index_range`], [`fill_constant`], [`block_max`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are borrowed `&[f64]` and never mutated; outputs are freshly
//!   allocated `Array1<f64>` values of pre-computed length.
//! - All sizes are validated up front through [`validation`]; invalid
//!   arguments are reported as [`BlockError`] and never clamped.
//! - NaN propagates: a window containing NaN has maximum NaN. ±∞ follow
//!   IEEE ordering. The rule is shared by every routine here.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; block `i` of size `b` covers `[i·b, (i+1)·b)`.
//! - The engine performs no I/O. It emits `tracing` events at `debug` /
//!   `trace` level and leaves subscriber setup to the caller.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_extremes::block_maxima::{BlockResult, k_block_sliding_maxima};
//!
//!   fn kmax(sample: &[f64]) -> BlockResult<Vec<f64>> {
//!       Ok(k_block_sliding_maxima(sample, 4, 3)?.to_vec())
//!   }
//!   # assert_eq!(kmax(&[1.0; 20]).unwrap().len(), 20);
//!   ```
//!
//! - The resulting maxima feed directly into the cost evaluators of
//!   [`crate::likelihood`], either as a raw sample or tabulated through
//!   `FrequencyTable::from_sample`.
//!
//! Testing notes
//! -------------
//! - Every submodule carries unit tests for its happy path, boundaries, and
//!   error branches.
//! - `tests/block_maxima_properties.rs` checks the length, brute-force,
//!   idempotence, and monotonicity properties with `proptest`.

mod deque;
pub mod disjoint;
pub mod errors;
pub mod kblock;
pub mod options;
pub mod primitives;
pub mod sliding;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::disjoint::disjoint_block_maxima;
pub use self::errors::{BlockError, BlockResult};
pub use self::kblock::{TailPolicy, k_block_sliding_maxima, k_block_sliding_maxima_with};
pub use self::options::{Execution, KBlockOptions};
pub use self::primitives::{block_max, fill_constant, index_range};
pub use self::sliding::sliding_maxima;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_extremes::block_maxima::prelude::*;
//
// to import the whole maxima surface in a single line.

pub mod prelude {
    pub use super::{
        BlockError, BlockResult, Execution, KBlockOptions, disjoint_block_maxima,
        k_block_sliding_maxima, k_block_sliding_maxima_with, sliding_maxima,
    };
}
