//! Squared loss
//!
//! `L(y1, y2) = (y1 - y2)² / 2`, with `∂L/∂y1 = y1 - y2`.

use crate::traits::{Loss, LossFamily};
use deconv_core::Real;

/// Half squared error
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Squared<F: Real = f64> {
    _phantom: std::marker::PhantomData<F>,
}

impl<F: Real> Squared<F> {
    /// Create a squared loss
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<F: Real> Default for Squared<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Real> Loss<F> for Squared<F> {
    fn family(&self) -> LossFamily {
        LossFamily::Squared
    }

    #[inline]
    fn loss_at(&self, y1: F, y2: F) -> F {
        let r = y1 - y2;
        r * r / F::two()
    }

    #[inline]
    fn derivative_at(&self, y1: F, y2: F) -> F {
        y1 - y2
    }
}
