//! Loss configuration and enum dispatch

use crate::activation::{Activation, Sigmoid};
use crate::logistic::Logistic;
use crate::squared::Squared;
use crate::traits::{Loss, LossFamily};
use deconv_core::{Real, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serializable description of a loss, e.g. `{"family": "logistic"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum LossConfig {
    Squared,
    Logistic,
}

impl LossConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Family this configuration describes
    pub fn family(&self) -> LossFamily {
        match self {
            LossConfig::Squared => LossFamily::Squared,
            LossConfig::Logistic => LossFamily::Logistic,
        }
    }

    /// Construct the loss; the logistic loss uses [`Sigmoid`]
    pub fn build<F: Real>(&self) -> AnyLoss<F> {
        self.build_with(Sigmoid)
    }

    /// Construct the loss with a custom activation for the logistic case
    pub fn build_with<F: Real, A: Activation<F>>(&self, activation: A) -> AnyLoss<F, A> {
        let loss = match self {
            LossConfig::Squared => AnyLoss::Squared(Squared::new()),
            LossConfig::Logistic => AnyLoss::Logistic(Logistic::new(activation)),
        };
        debug!(loss = loss.name(), "built loss from config");
        loss
    }
}

impl From<LossFamily> for LossConfig {
    fn from(family: LossFamily) -> Self {
        match family {
            LossFamily::Squared => LossConfig::Squared,
            LossFamily::Logistic => LossConfig::Logistic,
        }
    }
}

/// Any loss of this crate, selected at runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyLoss<F: Real = f64, A: Activation<F> = Sigmoid> {
    Squared(Squared<F>),
    Logistic(Logistic<F, A>),
}

impl<F: Real> AnyLoss<F> {
    /// Construct a loss of the given family
    pub fn new(family: LossFamily) -> Self {
        LossConfig::from(family).build()
    }
}

impl<F: Real, A: Activation<F>> Loss<F> for AnyLoss<F, A> {
    fn family(&self) -> LossFamily {
        match self {
            AnyLoss::Squared(l) => l.family(),
            AnyLoss::Logistic(l) => l.family(),
        }
    }

    #[inline]
    fn loss_at(&self, y1: F, y2: F) -> F {
        match self {
            AnyLoss::Squared(l) => l.loss_at(y1, y2),
            AnyLoss::Logistic(l) => l.loss_at(y1, y2),
        }
    }

    #[inline]
    fn derivative_at(&self, y1: F, y2: F) -> F {
        match self {
            AnyLoss::Squared(l) => l.derivative_at(y1, y2),
            AnyLoss::Logistic(l) => l.derivative_at(y1, y2),
        }
    }
}
