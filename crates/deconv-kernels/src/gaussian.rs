//! Gaussian kernel
//!
//! The normal density with standard deviation `sigma`:
//!
//! ```text
//! G(x) = exp(-x² / (2σ²)) / (σ √(2π))
//! ```
//!
//! Evaluation works on the standardized offset `u = x / σ`, so widths whose
//! square underflows still give finite values.

use crate::traits::{Kernel, KernelFamily};
use deconv_core::{Error, Real, Result};
use tracing::debug;

/// Gaussian kernel of width `sigma`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<F: Real = f64> {
    sigma: F,
    /// σ √(2π)
    norm: F,
}

impl<F: Real> GaussianKernel<F> {
    /// Create a Gaussian kernel; `sigma` must be positive and finite
    pub fn new(sigma: F) -> Result<Self> {
        if !(sigma > F::zero()) || !sigma.is_finite() {
            return Err(Error::invalid_sigma(sigma.to_f64().unwrap_or(f64::NAN)));
        }
        let norm = sigma * F::TAU().sqrt();
        debug!(sigma = ?sigma, "constructed Gaussian kernel");
        Ok(Self { sigma, norm })
    }

    /// Width of the kernel
    pub fn sigma(&self) -> F {
        self.sigma
    }
}

impl<F: Real> Kernel<F> for GaussianKernel<F> {
    fn family(&self) -> KernelFamily {
        KernelFamily::Gaussian
    }

    #[inline]
    fn evaluate_at(&self, x: F) -> F {
        let u = x / self.sigma;
        (-u * u * F::half()).exp() / self.norm
    }

    /// `-2x·G(x)/σ²`, zero wherever `G` underflows
    #[inline]
    fn derivative_at(&self, x: F) -> F {
        let g = self.evaluate_at(x);
        if g == F::zero() {
            return F::zero();
        }
        -F::two() * (x / self.sigma / self.sigma) * g
    }
}
