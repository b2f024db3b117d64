//! Cost-function interface for estimation code.
//!
//! [`NegLogLikelihood`] is the seam an external optimizer programs
//! against: it hands over a raw θ vector plus the data and gets a scalar
//! cost back. [`GevSample`] and [`GevFrequency`] adapt the GEV evaluators
//! to it for raw maxima samples and for tabulated maxima respectively.
use crate::likelihood::{
    errors::GevResult,
    frequency::FrequencyTable,
    gev::{gev_neg_log_likelihood, gev_neg_log_likelihood_table},
    params::GevParams,
};

pub trait NegLogLikelihood {
    type Data: ?Sized;

    /// Cost at `theta`; structural misuse (e.g. wrong θ length) is an error.
    fn value(&self, theta: &[f64], data: &Self::Data) -> GevResult<f64>;
}

/// GEV cost over a raw maxima sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GevSample;

impl NegLogLikelihood for GevSample {
    type Data = [f64];

    fn value(&self, theta: &[f64], data: &[f64]) -> GevResult<f64> {
        let params = GevParams::from_theta(theta)?;
        gev_neg_log_likelihood(&params, data)
    }
}

/// GEV cost over a frequency table of maxima.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GevFrequency;

impl NegLogLikelihood for GevFrequency {
    type Data = FrequencyTable;

    fn value(&self, theta: &[f64], data: &FrequencyTable) -> GevResult<f64> {
        let params = GevParams::from_theta(theta)?;
        gev_neg_log_likelihood_table(&params, data)
    }
}
