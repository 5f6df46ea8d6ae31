//! Blur kernels for sparse deconvolution
//!
//! This crate provides the point-spread kernels used by the deconvolution
//! forward model, each with its closed-form derivative:
//!
//! - [`DirichletKernel`]: 2π-periodic kernel of integer order `n`
//! - [`GaussianKernel`]: normal density of width `sigma`
//!
//! # Overview
//!
//! Every kernel implements [`Kernel`], which evaluates pointwise or over an
//! `ndarray` array of any rank. Array inputs are squeezed before evaluation
//! (length-1 axes are dropped, scalars stay 0-D), and the output has the
//! squeezed shape.
//!
//! | Kernel | Parameter | Value at 0 | Derivative |
//! |--------|-----------|------------|------------|
//! | Dirichlet | order `n >= 0` | (2n+1)/(2π) | quotient rule, 0 on multiples of 2π |
//! | Gaussian | `sigma > 0` | 1/(σ√(2π)) | −2x·G(x)/σ² |
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use deconv_kernels::{DirichletKernel, GaussianKernel, Kernel};
//! use ndarray::arr1;
//! use std::f64::consts::PI;
//!
//! let dirichlet = DirichletKernel::<f64>::new(2).unwrap();
//! let y = dirichlet.evaluate(&arr1(&[0.0, PI]));
//! assert!((y[0] - 5.0 / (2.0 * PI)).abs() < 1e-12);
//! assert!((y[1] - 1.0 / (2.0 * PI)).abs() < 1e-12);
//!
//! let gaussian = GaussianKernel::<f64>::new(1.0).unwrap();
//! assert!((gaussian.evaluate_at(0.0) - 0.398942).abs() < 1e-6);
//! ```
//!
//! ## Kernels From Configuration
//!
//! ```rust
//! use deconv_kernels::{AnyKernel, Kernel, KernelConfig};
//!
//! let config = KernelConfig::from_json(r#"{"family": "gaussian", "sigma": 0.5}"#).unwrap();
//! let kernel: AnyKernel = config.build().unwrap();
//! assert_eq!(kernel.name(), "Gaussian");
//!
//! // Invalid parameters are rejected when the kernel is built
//! let bad = KernelConfig::from_json(r#"{"family": "dirichlet", "order": 2.5}"#).unwrap();
//! assert!(bad.build::<f64>().is_err());
//! ```

pub mod config;
pub mod dirichlet;
pub mod gaussian;
pub mod traits;

pub use config::{AnyKernel, KernelConfig};
pub use dirichlet::DirichletKernel;
pub use gaussian::GaussianKernel;
pub use traits::{as_fn, Kernel, KernelFamily};

// Re-export core types for convenience
pub use deconv_core::{Error, Result};
