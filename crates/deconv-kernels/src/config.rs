//! Kernel configuration and enum dispatch
//!
//! An experiment describes its kernel as data, e.g.
//! `{"family": "dirichlet", "order": 2}` or `{"family": "gaussian", "sigma": 0.5}`,
//! and turns it into an [`AnyKernel`] with [`KernelConfig::build`]. Parameters
//! are validated here, so a bad configuration fails before any evaluation.

use crate::dirichlet::DirichletKernel;
use crate::gaussian::GaussianKernel;
use crate::traits::{Kernel, KernelFamily};
use deconv_core::{Error, Real, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Serializable description of a kernel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum KernelConfig {
    /// Dirichlet kernel; `order` must be a non-negative whole number
    Dirichlet { order: f64 },
    /// Gaussian kernel; `sigma` must be positive and finite
    Gaussian { sigma: f64 },
}

impl KernelConfig {
    /// Pair a family with its single shape parameter
    pub fn new(family: KernelFamily, parameter: f64) -> Self {
        match family {
            KernelFamily::Dirichlet => KernelConfig::Dirichlet { order: parameter },
            KernelFamily::Gaussian => KernelConfig::Gaussian { sigma: parameter },
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Family this configuration describes
    pub fn family(&self) -> KernelFamily {
        match self {
            KernelConfig::Dirichlet { .. } => KernelFamily::Dirichlet,
            KernelConfig::Gaussian { .. } => KernelFamily::Gaussian,
        }
    }

    /// Validate the parameters and construct the kernel
    #[instrument(level = "debug", err)]
    pub fn build<F: Real>(&self) -> Result<AnyKernel<F>> {
        let kernel = match *self {
            KernelConfig::Dirichlet { order } => {
                AnyKernel::Dirichlet(DirichletKernel::from_real(order)?)
            }
            KernelConfig::Gaussian { sigma } => {
                AnyKernel::Gaussian(GaussianKernel::new(F::cast(sigma)?)?)
            }
        };
        debug!(kernel = kernel.name(), "built kernel from config");
        Ok(kernel)
    }
}

/// Any kernel of this crate, selected at runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyKernel<F: Real = f64> {
    Dirichlet(DirichletKernel<F>),
    Gaussian(GaussianKernel<F>),
}

impl<F: Real> AnyKernel<F> {
    /// Construct a kernel from its family and shape parameter
    pub fn new(family: KernelFamily, parameter: f64) -> Result<Self> {
        KernelConfig::new(family, parameter).build()
    }

    /// Configuration that rebuilds this kernel
    pub fn config(&self) -> Result<KernelConfig> {
        Ok(match self {
            AnyKernel::Dirichlet(k) => KernelConfig::Dirichlet {
                order: f64::from(k.order()),
            },
            AnyKernel::Gaussian(k) => {
                let sigma = k.sigma().to_f64().ok_or_else(|| {
                    Error::Computation("sigma is not representable as f64".to_string())
                })?;
                KernelConfig::Gaussian { sigma }
            }
        })
    }
}

impl<F: Real> Kernel<F> for AnyKernel<F> {
    fn family(&self) -> KernelFamily {
        match self {
            AnyKernel::Dirichlet(k) => k.family(),
            AnyKernel::Gaussian(k) => k.family(),
        }
    }

    #[inline]
    fn evaluate_at(&self, x: F) -> F {
        match self {
            AnyKernel::Dirichlet(k) => k.evaluate_at(x),
            AnyKernel::Gaussian(k) => k.evaluate_at(x),
        }
    }

    #[inline]
    fn derivative_at(&self, x: F) -> F {
        match self {
            AnyKernel::Dirichlet(k) => k.derivative_at(x),
            AnyKernel::Gaussian(k) => k.derivative_at(x),
        }
    }
}

impl<F: Real> From<DirichletKernel<F>> for AnyKernel<F> {
    fn from(kernel: DirichletKernel<F>) -> Self {
        AnyKernel::Dirichlet(kernel)
    }
}

impl<F: Real> From<GaussianKernel<F>> for AnyKernel<F> {
    fn from(kernel: GaussianKernel<F>) -> Self {
        AnyKernel::Gaussian(kernel)
    }
}
