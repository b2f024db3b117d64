//! GEV parameter triple (μ, σ, γ).
//!
//! Parameters are *not* validated at construction: an optimizer may probe
//! any point of ℝ³, and the evaluators answer inadmissible points with the
//! penalty cost. [`GevParams::is_admissible`] states the admissibility rule
//! in one place.
use crate::likelihood::errors::{GevError, GevResult};

/// Number of entries in a GEV θ vector.
pub const GEV_THETA_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GevParams {
    /// Location μ.
    pub mu: f64,
    /// Scale σ (admissible when > 0).
    pub sigma: f64,
    /// Shape γ (γ = 0 is the Gumbel case).
    pub gamma: f64,
}

impl GevParams {
    pub fn new(mu: f64, sigma: f64, gamma: f64) -> Self {
        GevParams { mu, sigma, gamma }
    }

    /// Read `θ = (μ, σ, γ)`.
    ///
    /// # Errors
    /// - [`GevError::InvalidThetaLength`] if `theta.len() != 3`.
    pub fn from_theta(theta: &[f64]) -> GevResult<Self> {
        match theta {
            &[mu, sigma, gamma] => Ok(GevParams { mu, sigma, gamma }),
            _ => Err(GevError::InvalidThetaLength {
                expected: GEV_THETA_LEN,
                actual: theta.len(),
            }),
        }
    }

    /// `σ > 0` and no parameter is NaN.
    pub fn is_admissible(&self) -> bool {
        self.sigma > 0.0 && !self.mu.is_nan() && !self.gamma.is_nan()
    }

    /// `true` when γ is exactly zero (Gumbel limit).
    pub fn is_gumbel(&self) -> bool {
        self.gamma == 0.0
    }
}
