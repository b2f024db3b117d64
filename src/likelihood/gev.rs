//! likelihood::gev — GEV negative log-likelihood cost evaluators.
//!
//! Purpose
//! -------
//! Evaluate the negative log-likelihood of the Generalized Extreme Value
//! distribution for a maxima sample, a single observation, or a frequency
//! table. These are the scalar costs an external optimizer minimizes when
//! fitting (μ, σ, γ) to the output of the `block_maxima` engine.
//!
//! Key behaviors
//! -------------
//! - For γ ≠ 0, with `z = (x - μ)/σ` and `t = 1 + γ z`, each observation
//!   contributes `ln σ + (1/γ + 1) ln t + t^(-1/γ)`.
//! - For γ = 0 (exactly) each observation contributes the Gumbel term
//!   `ln σ + z + e^(-z)`, evaluated as `-ln f` of `statrs`' Gumbel density.
//! - Inadmissible parameters (σ ≤ 0, any NaN) and observations outside the
//!   support (`t ≤ 0`) short-circuit the sample and single-observation
//!   costs to [`GEV_PENALTY`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The whole-sample evaluator lets NaN observations propagate into the
//!   cost; the single-observation and table evaluators additionally treat
//!   a non-finite `t` as outside the support.
//! - A table evaluates to the count-weighted sum of single-observation
//!   costs. An entry outside the support contributes `count × GEV_PENALTY`
//!   while the other entries still add their cost, and inadmissible
//!   parameters give `total_count × GEV_PENALTY`.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against the closed forms, check the penalty paths,
//!   and verify that a table and its expanded sample give the same cost.

use crate::likelihood::{
    errors::GevResult,
    frequency::FrequencyTable,
    params::GevParams,
};
use statrs::distribution::{Continuous, Gumbel};

/// Finite cost returned for inadmissible parameters or unsupported data.
pub const GEV_PENALTY: f64 = 1e10;

/// Per-call evaluator with the parameter-dependent pieces precomputed.
struct GevKernel {
    params: GevParams,
    ln_sigma: f64,
    gumbel: Option<Gumbel>,
}

impl GevKernel {
    /// Callers check `params.is_admissible()` first.
    fn new(params: &GevParams) -> GevResult<Self> {
        let gumbel =
            if params.is_gumbel() { Some(Gumbel::new(params.mu, params.sigma)?) } else { None };
        Ok(GevKernel { params: *params, ln_sigma: params.sigma.ln(), gumbel })
    }

    /// Cost of one observation, or `None` when `x` is outside the support.
    #[inline]
    fn observation(&self, x: f64, strict: bool) -> Option<f64> {
        if let Some(gumbel) = &self.gumbel {
            return Some(-gumbel.ln_pdf(x));
        }
        let GevParams { mu, sigma, gamma } = self.params;
        let z = (x - mu) / sigma;
        let t = 1.0 + gamma * z;
        if t <= 0.0 || (strict && !t.is_finite()) {
            return None;
        }
        let ln_t = t.ln();
        Some(self.ln_sigma + (1.0 / gamma + 1.0) * ln_t + (-ln_t / gamma).exp())
    }
}

/// GEV negative log-likelihood of a sample.
///
/// Parameters
/// ----------
/// - `params`: [`GevParams`]
///   Candidate (μ, σ, γ).
/// - `sample`: `&[f64]`
///   Maxima sample, e.g. from `disjoint_block_maxima` or
///   `k_block_sliding_maxima`.
///
/// Returns
/// -------
/// `GevResult<f64>`
///   - `Ok(cost)`: the summed cost, or [`GEV_PENALTY`] for inadmissible
///     parameters or any observation with `1 + γ z ≤ 0`.
///   - `Err(GevError::Distribution)` only if `statrs` rejects the Gumbel
///     parameters (e.g. infinite σ).
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::likelihood::{GEV_PENALTY, GevParams, gev_neg_log_likelihood};
/// let cost = gev_neg_log_likelihood(&GevParams::new(0.0, 1.0, 0.0), &[0.0]).unwrap();
/// assert!((cost - 1.0).abs() < 1e-12); // ln 1 + 0 + e^0
/// let bad = gev_neg_log_likelihood(&GevParams::new(0.0, -1.0, 0.0), &[0.0]).unwrap();
/// assert_eq!(bad, GEV_PENALTY);
/// ```
pub fn gev_neg_log_likelihood(params: &GevParams, sample: &[f64]) -> GevResult<f64> {
    if !params.is_admissible() {
        return Ok(GEV_PENALTY);
    }
    let kernel = GevKernel::new(params)?;
    let mut cost = 0.0;
    for &x in sample {
        match kernel.observation(x, false) {
            Some(term) => cost += term,
            None => return Ok(GEV_PENALTY),
        }
    }
    Ok(cost)
}

/// GEV negative log-likelihood of a single observation.
///
/// Returns [`GEV_PENALTY`] for inadmissible parameters and for observations
/// whose `1 + γ z` is ≤ 0 or non-finite.
pub fn gev_neg_log_likelihood_single(params: &GevParams, x: f64) -> GevResult<f64> {
    if !params.is_admissible() {
        return Ok(GEV_PENALTY);
    }
    let kernel = GevKernel::new(params)?;
    Ok(kernel.observation(x, true).unwrap_or(GEV_PENALTY))
}

/// Count-weighted GEV negative log-likelihood of a frequency table.
///
/// Returns `Σ countᵢ · gev_neg_log_likelihood_single(params, valueᵢ)`.
/// This equals [`gev_neg_log_likelihood`] of the expanded sample whenever
/// every entry is inside the support. Each unsupported entry contributes
/// `countᵢ × GEV_PENALTY` instead of replacing the whole sum, so the cost
/// still grows with the mass outside the support.
///
/// Examples
/// --------
/// ```rust
/// # use rust_extremes::likelihood::{
/// #     FrequencyTable, GEV_PENALTY, GevParams, gev_neg_log_likelihood_table,
/// # };
/// let table = FrequencyTable::new(vec![0.5, 3.0], vec![4.0, 2.0]).unwrap();
/// let bad_scale = GevParams::new(0.0, -1.0, 0.0);
/// assert_eq!(gev_neg_log_likelihood_table(&bad_scale, &table).unwrap(), 6.0 * GEV_PENALTY);
/// ```
pub fn gev_neg_log_likelihood_table(params: &GevParams, table: &FrequencyTable) -> GevResult<f64> {
    if !params.is_admissible() {
        return Ok(table.total_count() * GEV_PENALTY);
    }
    let kernel = GevKernel::new(params)?;
    Ok(table
        .iter()
        .map(|(value, count)| count * kernel.observation(value, true).unwrap_or(GEV_PENALTY))
        .sum())
}
