//! Core traits for blur kernels

use deconv_core::array::map_squeezed;
use deconv_core::{ArrayD, Real};
use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace_span;

/// Kernel families provided by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelFamily {
    /// 2π-periodic Dirichlet kernel of integer order
    Dirichlet,
    /// Gaussian density of a given width
    Gaussian,
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelFamily::Dirichlet => write!(f, "dirichlet"),
            KernelFamily::Gaussian => write!(f, "gaussian"),
        }
    }
}

/// A one-dimensional kernel together with its derivative
///
/// Implementors only provide the pointwise [`evaluate_at`](Kernel::evaluate_at)
/// and [`derivative_at`](Kernel::derivative_at). The array methods squeeze
/// their input first (length-1 axes are dropped, a scalar stays 0-D) and
/// return an array of the squeezed shape; the input is never modified.
///
/// Kernels are immutable after construction and can be shared freely
/// between threads.
pub trait Kernel<F: Real = f64>: Clone + Send + Sync {
    /// Which family this kernel belongs to
    fn family(&self) -> KernelFamily;

    /// Kernel value at a single point
    fn evaluate_at(&self, x: F) -> F;

    /// Kernel derivative at a single point
    fn derivative_at(&self, x: F) -> F;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        match self.family() {
            KernelFamily::Dirichlet => "Dirichlet",
            KernelFamily::Gaussian => "Gaussian",
        }
    }

    /// Evaluate the kernel elementwise
    fn evaluate<S, D>(&self, x: &ArrayBase<S, D>) -> ArrayD<F>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        let _span = trace_span!("evaluate", kernel = self.name(), shape = ?x.shape()).entered();
        map_squeezed(x, |v| self.evaluate_at(v))
    }

    /// Evaluate the kernel derivative elementwise
    fn derivative<S, D>(&self, x: &ArrayBase<S, D>) -> ArrayD<F>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        let _span = trace_span!("derivative", kernel = self.name(), shape = ?x.shape()).entered();
        map_squeezed(x, |v| self.derivative_at(v))
    }

    /// Shorthand for [`evaluate`](Kernel::evaluate)
    fn call<S, D>(&self, x: &ArrayBase<S, D>) -> ArrayD<F>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        self.evaluate(x)
    }
}

/// Borrow a kernel as a plain pointwise function
///
/// Handy when a kernel is passed to code that expects `Fn(f64) -> f64`,
/// e.g. a quadrature routine or a convolution loop.
pub fn as_fn<F: Real, K: Kernel<F>>(kernel: &K) -> impl Fn(F) -> F + '_ {
    move |x| kernel.evaluate_at(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, arr1};

    /// Minimal kernel used to exercise the provided methods
    #[derive(Clone)]
    struct Box1;

    impl Kernel for Box1 {
        fn family(&self) -> KernelFamily {
            KernelFamily::Gaussian
        }

        fn evaluate_at(&self, x: f64) -> f64 {
            if x.abs() <= 0.5 {
                1.0
            } else {
                0.0
            }
        }

        fn derivative_at(&self, _x: f64) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_call_delegates_to_evaluate() {
        let x = arr1(&[-1.0, 0.0, 0.25, 2.0]);
        assert_eq!(Box1.call(&x), Box1.evaluate(&x));
        assert_eq!(Box1.call(&x), arr1(&[0.0, 1.0, 1.0, 0.0]).into_dyn());
    }

    #[test]
    fn test_scalar_input_stays_scalar() {
        let out = Box1.derivative(&arr0(0.1));
        assert_eq!(out.ndim(), 0);
    }

    #[test]
    fn test_as_fn() {
        let f = as_fn(&Box1);
        assert_eq!(f(0.0), 1.0);
        assert_eq!(f(3.0), 0.0);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(KernelFamily::Dirichlet.to_string(), "dirichlet");
        assert_eq!(KernelFamily::Gaussian.to_string(), "gaussian");
    }
}
