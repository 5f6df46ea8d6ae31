//! Core traits for loss functions

use deconv_core::array::zip_broadcast;
use deconv_core::{ArrayD, Real, Result};
use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace_span;

/// Loss families provided by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossFamily {
    /// Half squared error
    Squared,
    /// Base-2 logistic loss on the margin `y1 * y2`
    Logistic,
}

impl fmt::Display for LossFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossFamily::Squared => write!(f, "squared"),
            LossFamily::Logistic => write!(f, "logistic"),
        }
    }
}

/// Elementwise loss between a prediction `y1` and a target `y2`
///
/// Derivatives are always taken with respect to the first argument `y1`,
/// holding `y2` fixed, which is what a gradient step on the prediction
/// needs.
///
/// The array methods broadcast `y1` against `y2` with NumPy rules and return
/// an array of the broadcast shape; incompatible shapes give
/// [`Error::ShapeMismatch`](deconv_core::Error::ShapeMismatch).
pub trait Loss<F: Real = f64>: Clone + Send + Sync {
    /// Which family this loss belongs to
    fn family(&self) -> LossFamily;

    /// Loss for a single (prediction, target) pair
    fn loss_at(&self, y1: F, y2: F) -> F;

    /// ∂ loss / ∂ y1 for a single pair
    fn derivative_at(&self, y1: F, y2: F) -> F;

    /// Name of this loss for debugging/logging
    fn name(&self) -> &'static str {
        match self.family() {
            LossFamily::Squared => "Squared",
            LossFamily::Logistic => "Logistic",
        }
    }

    /// Elementwise loss
    fn loss<S1, D1, S2, D2>(&self, y1: &ArrayBase<S1, D1>, y2: &ArrayBase<S2, D2>) -> Result<ArrayD<F>>
    where
        S1: Data<Elem = F>,
        D1: Dimension,
        S2: Data<Elem = F>,
        D2: Dimension,
    {
        let _span = trace_span!("loss", loss = self.name(), left = ?y1.shape(), right = ?y2.shape())
            .entered();
        zip_broadcast(y1, y2, |a, b| self.loss_at(a, b))
    }

    /// Elementwise derivative with respect to `y1`
    fn derivative<S1, D1, S2, D2>(
        &self,
        y1: &ArrayBase<S1, D1>,
        y2: &ArrayBase<S2, D2>,
    ) -> Result<ArrayD<F>>
    where
        S1: Data<Elem = F>,
        D1: Dimension,
        S2: Data<Elem = F>,
        D2: Dimension,
    {
        let _span = trace_span!(
            "loss_derivative",
            loss = self.name(),
            left = ?y1.shape(),
            right = ?y2.shape()
        )
        .entered();
        zip_broadcast(y1, y2, |a, b| self.derivative_at(a, b))
    }

    /// Shorthand for [`loss`](Loss::loss)
    fn call<S1, D1, S2, D2>(&self, y1: &ArrayBase<S1, D1>, y2: &ArrayBase<S2, D2>) -> Result<ArrayD<F>>
    where
        S1: Data<Elem = F>,
        D1: Dimension,
        S2: Data<Elem = F>,
        D2: Dimension,
    {
        self.loss(y1, y2)
    }
}
