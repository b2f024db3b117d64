//! likelihood — GEV cost evaluators and frequency tables for maxima samples.
//!
//! Purpose
//! -------
//! Provide the scalar costs that extreme-value estimation minimizes over
//! the maxima produced by [`crate::block_maxima`], plus frequency tables
//! that let repeated maxima be evaluated once per distinct value.
//!
//! Key behaviors
//! -------------
//! - [`gev_neg_log_likelihood`], [`gev_neg_log_likelihood_single`], and
//!   [`gev_neg_log_likelihood_table`] evaluate the GEV negative
//!   log-likelihood for a sample, one observation, or a table.
//! - [`NegLogLikelihood`] with [`GevSample`] / [`GevFrequency`] exposes the
//!   same costs behind a θ-vector interface for optimizer code.
//! - [`FrequencyTable`] tabulates samples (or parses labelled tables) and
//!   reports count-weighted mean and variance.
//!
//! Invariants & assumptions
//! ------------------------
//! - Costs never fail on numerically bad θ: inadmissible parameters and
//!   data outside the support cost [`GEV_PENALTY`] (weighted by count in a
//!   table). Errors ([`GevError`]) signal structural misuse only.
//! - This subtree evaluates costs; it does not search for optima and holds
//!   no state between calls.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!
//!   ```rust
//!   use rust_extremes::block_maxima::k_block_sliding_maxima;
//!   use rust_extremes::likelihood::{FrequencyTable, GevFrequency, NegLogLikelihood};
//!
//!   let sample: Vec<f64> = (0..60).map(|i| ((i * 37) % 17) as f64).collect();
//!   let maxima = k_block_sliding_maxima(&sample, 5, 3).unwrap();
//!   let table = FrequencyTable::from_sample(maxima.as_slice().unwrap()).unwrap();
//!   let cost = GevFrequency.value(&[12.0, 3.0, 0.0], &table).unwrap();
//!   assert!(cost.is_finite());
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each evaluator; the integration test
//!   `tests/integration_maxima_pipeline.rs` runs maxima through tabulation
//!   and cost evaluation end to end.

pub mod errors;
pub mod frequency;
pub mod gev;
pub mod params;
pub mod traits;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{GevError, GevResult};
pub use self::frequency::FrequencyTable;
pub use self::gev::{
    GEV_PENALTY, gev_neg_log_likelihood, gev_neg_log_likelihood_single,
    gev_neg_log_likelihood_table,
};
pub use self::params::{GEV_THETA_LEN, GevParams};
pub use self::traits::{GevFrequency, GevSample, NegLogLikelihood};

pub mod prelude {
    pub use super::{
        FrequencyTable, GEV_PENALTY, GevError, GevFrequency, GevParams, GevResult, GevSample,
        NegLogLikelihood,
    };
}
