//! Logistic loss in bits
//!
//! For a prediction `y1` and a signed target `y2` the loss is measured on the
//! margin `z = y1 * y2`:
//!
//! ```text
//! L(y1, y2)  = -log₂ σ(z)
//! ∂L/∂y1     = -y2 · σ'(z) / (ln 2 · σ(z))
//! ```
//!
//! `σ` is the injected [`Activation`], [`Sigmoid`] by default.

use crate::activation::{Activation, Sigmoid};
use crate::traits::{Loss, LossFamily};
use deconv_core::Real;
use tracing::debug;

/// Base-2 logistic loss over an injected activation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic<F: Real = f64, A: Activation<F> = Sigmoid> {
    activation: A,
    _phantom: std::marker::PhantomData<F>,
}

impl<F: Real, A: Activation<F>> Logistic<F, A> {
    /// Create a logistic loss over `activation`
    pub fn new(activation: A) -> Self {
        debug!(activation = std::any::type_name::<A>(), "constructed logistic loss");
        Self {
            activation,
            _phantom: std::marker::PhantomData,
        }
    }

    /// The activation this loss evaluates the margin with
    pub fn activation(&self) -> &A {
        &self.activation
    }
}

impl<F: Real> Default for Logistic<F, Sigmoid> {
    fn default() -> Self {
        Self::new(Sigmoid)
    }
}

impl<F: Real, A: Activation<F>> Loss<F> for Logistic<F, A> {
    fn family(&self) -> LossFamily {
        LossFamily::Logistic
    }

    #[inline]
    fn loss_at(&self, y1: F, y2: F) -> F {
        -self.activation.log_activation_at(y1 * y2) / F::LN_2()
    }

    #[inline]
    fn derivative_at(&self, y1: F, y2: F) -> F {
        -y2 * self.activation.log_derivative_at(y1 * y2) / F::LN_2()
    }
}
