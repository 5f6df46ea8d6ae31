//! Error types for the sparse deconvolution toolkit
//!
//! Provides a unified error type for all deconv crates.

use thiserror::Error;

/// Core error type for kernel and loss evaluation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided at construction time
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two arrays that cannot be broadcast against each other
    #[error("Shape mismatch: cannot broadcast {left:?} against {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Malformed configuration document
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a Dirichlet order that is not a non-negative integer
    pub fn invalid_order(order: f64) -> Self {
        Self::InvalidParameter(format!(
            "Dirichlet order {order} must be a non-negative integer"
        ))
    }

    /// Create an error for a whole-number Dirichlet order above `u32::MAX`
    pub fn order_out_of_range(order: f64) -> Self {
        Self::InvalidParameter(format!(
            "Dirichlet order {order} exceeds the largest supported order {}",
            u32::MAX
        ))
    }

    /// Create an error for a Gaussian width that is not positive and finite
    pub fn invalid_sigma(sigma: f64) -> Self {
        Self::InvalidParameter(format!(
            "Gaussian sigma {sigma} must be positive and finite"
        ))
    }

    /// Create an error for two shapes that do not broadcast
    pub fn shape_mismatch(left: &[usize], right: &[usize]) -> Self {
        Self::ShapeMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }

    /// Create an error for a constant that the float type cannot represent
    pub fn unrepresentable(value: f64, type_name: &str) -> Self {
        Self::Computation(format!("{value} is not representable as {type_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("sigma must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: sigma must be positive");

        let err = Error::Computation("overflow".to_string());
        assert_eq!(err.to_string(), "Computation error: overflow");

        let err = Error::ShapeMismatch {
            left: vec![3],
            right: vec![4],
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: cannot broadcast [3] against [4]"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_order(2.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Dirichlet order 2.5 must be a non-negative integer"
        );

        let err = Error::order_out_of_range(1e12);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Dirichlet order 1000000000000 exceeds the largest supported order 4294967295"
        );

        let err = Error::invalid_sigma(-1.0);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Gaussian sigma -1 must be positive and finite"
        );

        match Error::shape_mismatch(&[2, 3], &[4]) {
            Error::ShapeMismatch { left, right } => {
                assert_eq!(left, vec![2, 3]);
                assert_eq!(right, vec![4]);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::unrepresentable(1e300, "f32");
        assert!(err.to_string().contains("f32"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::InvalidParameter("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidParameter"));
        assert!(debug_str.contains("test"));
    }
}
