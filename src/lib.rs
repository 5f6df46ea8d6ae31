//! Kernels and losses for sparse deconvolution experiments
//!
//! This crate re-exports the workspace members:
//!
//! - [`array`]: squeezing and broadcasting helpers
//! - [`kernels`]: Dirichlet and Gaussian blur kernels
//! - [`loss`]: squared and logistic losses with the sigmoid activation
//!
//! # Example
//!
//! ```rust
//! use sparse_deconv::prelude::*;
//! use ndarray::Array1;
//!
//! // Blur a spike train with a Gaussian point-spread function
//! let kernel = KernelConfig::Gaussian { sigma: 0.1 }.build::<f64>().unwrap();
//! let grid = Array1::linspace(0.0, 1.0, 64);
//! let spikes = [(0.25, 1.0), (0.7, -0.5)];
//! let mut signal = Array1::<f64>::zeros(grid.len());
//! for &(position, weight) in &spikes {
//!     signal += &(kernel.evaluate(&grid.mapv(|t| t - position)) * weight);
//! }
//!
//! // Compare against an observation with the squared loss
//! let observed = signal.mapv(|v| v + 0.01);
//! let loss = LossConfig::Squared.build::<f64>();
//! let residual = loss.loss(&signal, &observed).unwrap();
//! assert_eq!(residual.shape(), &[64]);
//! ```

pub use deconv_core::array;
pub use deconv_kernels as kernels;
pub use deconv_loss as loss;

pub use deconv_core::{Error, Real, Result};
pub use deconv_kernels::{
    AnyKernel, DirichletKernel, GaussianKernel, Kernel, KernelConfig, KernelFamily,
};
pub use deconv_loss::{
    Activation, AnyLoss, Logistic, Loss, LossConfig, LossFamily, Sigmoid, Squared,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Activation, AnyKernel, AnyLoss, DirichletKernel, Error, GaussianKernel, Kernel,
        KernelConfig, KernelFamily, Logistic, Loss, LossConfig, LossFamily, Real, Result,
        Sigmoid, Squared,
    };
}
