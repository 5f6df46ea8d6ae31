//! Core types for the sparse deconvolution toolkit
//!
//! This crate holds what the kernel and loss crates share:
//!
//! - [`Error`] / [`Result`]: the single error type of the workspace
//! - [`Real`]: the floating point element type evaluators are generic over
//! - [`array`]: squeezing and broadcasting helpers over `ndarray` arrays
//!
//! # Example
//!
//! ```rust
//! use deconv_core::array::{broadcast_shape, squeeze};
//! use ndarray::arr2;
//!
//! let x = arr2(&[[0.0, 1.0, 2.0]]);
//! assert_eq!(squeeze(&x).shape(), &[3]);
//! assert_eq!(broadcast_shape(&[2, 1], &[3]).unwrap(), vec![2, 3]);
//! ```

pub mod array;
pub mod error;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Real;

// Re-export the array type every evaluator returns
pub use ndarray::ArrayD;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array::{broadcast_shape, squeeze};
    pub use crate::error::Error;
    pub use crate::{ArrayD, Real, Result};
}
