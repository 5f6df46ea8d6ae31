//! Loss functions for fitting deconvolution models
//!
//! This crate provides elementwise losses between a prediction `y1` and a
//! target `y2`, together with their derivatives with respect to `y1`:
//!
//! - [`Squared`]: `(y1 - y2)² / 2`
//! - [`Logistic`]: `-log₂ σ(y1 · y2)` over an injected [`Activation`]
//!
//! # Overview
//!
//! | Loss | Value | ∂/∂y1 |
//! |------|-------|-------|
//! | Squared | (y1 − y2)²/2 | y1 − y2 |
//! | Logistic | −log₂ σ(y1 y2) | −y2 σ'(y1 y2) / (ln 2 · σ(y1 y2)) |
//!
//! Array arguments are broadcast against each other with NumPy rules.
//!
//! # Examples
//!
//! ```rust
//! use deconv_loss::{Logistic, Loss, Sigmoid, Squared};
//! use ndarray::arr1;
//!
//! let prediction = arr1(&[0.5, 1.0, 1.5]);
//! let target = arr1(&[0.0, 1.0, 2.0]);
//!
//! let squared = Squared::<f64>::new();
//! let grad = squared.derivative(&prediction, &target).unwrap();
//! assert_eq!(grad, arr1(&[0.5, 0.0, -0.5]).into_dyn());
//!
//! // The activation is an explicit dependency of the logistic loss
//! let logistic: Logistic = Logistic::new(Sigmoid);
//! let bits = logistic.loss(&arr1(&[0.0]), &arr1(&[1.0])).unwrap();
//! assert!((bits[0] - 1.0).abs() < 1e-12);
//! ```

pub mod activation;
pub mod config;
pub mod logistic;
pub mod squared;
pub mod traits;

pub use activation::{Activation, Sigmoid};
pub use config::{AnyLoss, LossConfig};
pub use logistic::Logistic;
pub use squared::Squared;
pub use traits::{Loss, LossFamily};

// Re-export core types for convenience
pub use deconv_core::{Error, Result};
