//! Activation functions consumed by the logistic loss
//!
//! The logistic loss does not hard-wire its squashing function: it takes any
//! [`Activation`] at construction. [`Sigmoid`] is the standard choice.

use deconv_core::array::map_elementwise;
use deconv_core::{ArrayD, Real};
use ndarray::{ArrayBase, Data, Dimension};

/// Elementwise activation function with its derivative
pub trait Activation<F: Real = f64>: Clone + Send + Sync {
    /// Activation value at `z`
    fn activation_at(&self, z: F) -> F;

    /// Derivative of the activation at `z`
    fn derivative_at(&self, z: F) -> F;

    /// Natural log of the activation, `ln σ(z)`
    ///
    /// Override when the activation can underflow to zero while its log
    /// remains finite.
    fn log_activation_at(&self, z: F) -> F {
        self.activation_at(z).ln()
    }

    /// Derivative of `ln σ(z)`, i.e. `σ'(z) / σ(z)`
    fn log_derivative_at(&self, z: F) -> F {
        self.derivative_at(z) / self.activation_at(z)
    }

    /// Apply the activation elementwise, keeping the input shape
    fn activation<S, D>(&self, z: &ArrayBase<S, D>) -> ArrayD<F>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        map_elementwise(z, |v| self.activation_at(v))
    }

    /// Apply the activation derivative elementwise, keeping the input shape
    fn derivative<S, D>(&self, z: &ArrayBase<S, D>) -> ArrayD<F>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        map_elementwise(z, |v| self.derivative_at(v))
    }
}

/// Logistic sigmoid `σ(z) = 1 / (1 + e^(-z))`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl<F: Real> Activation<F> for Sigmoid {
    #[inline]
    fn activation_at(&self, z: F) -> F {
        // Split on sign so exp never overflows
        if z >= F::zero() {
            F::one() / (F::one() + (-z).exp())
        } else {
            let e = z.exp();
            e / (F::one() + e)
        }
    }

    #[inline]
    fn derivative_at(&self, z: F) -> F {
        let s = self.activation_at(z);
        s * (F::one() - s)
    }

    /// `ln σ(z) = -ln(1 + e^(-z))`
    fn log_activation_at(&self, z: F) -> F {
        if z >= F::zero() {
            -(-z).exp().ln_1p()
        } else {
            z - z.exp().ln_1p()
        }
    }

    /// `σ'(z) / σ(z) = 1 - σ(z) = σ(-z)`
    fn log_derivative_at(&self, z: F) -> F {
        self.activation_at(-z)
    }
}
