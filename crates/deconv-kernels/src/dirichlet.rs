//! Dirichlet kernel of integer order
//!
//! ```text
//! D_n(x) = sin((n + 1/2) x) / (2π sin(x / 2))
//! ```
//!
//! The kernel is 2π-periodic and even. At every multiple of 2π the closed
//! form is 0/0; the limit there is (2n + 1) / (2π), and the derivative is 0.
//! Those points are detected with `x mod 2π == 0` and answered directly.

use crate::traits::{Kernel, KernelFamily};
use deconv_core::{Error, Real, Result};
use tracing::debug;

/// Dirichlet kernel `D_n` (2π periodic)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletKernel<F: Real = f64> {
    order: u32,
    /// n + 1/2
    freq: F,
    /// (2n + 1) / (2π), the value on the singular set
    peak: F,
}

impl<F: Real> DirichletKernel<F> {
    /// Create a Dirichlet kernel of order `n`
    pub fn new(order: u32) -> Result<Self> {
        let n = f64::from(order);
        let freq = F::cast(n + 0.5)?;
        let peak = F::cast(2.0 * n + 1.0)? / F::TAU();
        debug!(order, "constructed Dirichlet kernel");
        Ok(Self { order, freq, peak })
    }

    /// Create a Dirichlet kernel from a real-valued order
    ///
    /// Fails unless `order` is a finite, non-negative whole number no larger
    /// than `u32::MAX`.
    pub fn from_real(order: f64) -> Result<Self> {
        if !order.is_finite() || order < 0.0 || order.fract() != 0.0 {
            return Err(Error::invalid_order(order));
        }
        if order > f64::from(u32::MAX) {
            return Err(Error::order_out_of_range(order));
        }
        Self::new(order as u32)
    }

    /// Order `n` of the kernel
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Kernel value at multiples of 2π
    pub fn peak(&self) -> F {
        self.peak
    }

    /// Whether `x` lies on the removable singularity (x mod 2π == 0)
    #[inline]
    pub fn is_singular(x: F) -> bool {
        x % F::TAU() == F::zero()
    }
}

impl<F: Real> Kernel<F> for DirichletKernel<F> {
    fn family(&self) -> KernelFamily {
        KernelFamily::Dirichlet
    }

    fn evaluate_at(&self, x: F) -> F {
        if Self::is_singular(x) {
            return self.peak;
        }
        let denom = F::TAU() * (x * F::half()).sin();
        // sin(x/2) can still round to zero for subnormal x
        if denom == F::zero() {
            return self.peak;
        }
        (self.freq * x).sin() / denom
    }

    fn derivative_at(&self, x: F) -> F {
        if Self::is_singular(x) {
            return F::zero();
        }
        let a = self.freq;
        let b = F::half();
        let (sin_bz, cos_bz) = (b * x).sin_cos();
        let denom = sin_bz * sin_bz;
        if denom == F::zero() {
            return F::zero();
        }
        let (sin_az, cos_az) = (a * x).sin_cos();
        (a * cos_az * sin_bz - b * cos_bz * sin_az) / denom
    }
}
