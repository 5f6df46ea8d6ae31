//! Numeric trait for generic kernel and loss evaluation
//!
//! Kernels and losses are written once against [`Real`] and work for any
//! floating point type that `num-traits` knows about (`f64` by default, `f32`
//! where memory matters).

use crate::error::{Error, Result};
use num_traits::{Float, FloatConst, NumCast};
use std::fmt::Debug;

/// Floating point element type accepted by every evaluator in the workspace
pub trait Real: Float + FloatConst + Debug + Send + Sync + 'static {
    /// Convert an `f64` constant into this type
    fn cast(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value)
            .filter(|v: &Self| v.is_finite() || !value.is_finite())
            .ok_or_else(|| Error::unrepresentable(value, std::any::type_name::<Self>()))
    }

    /// Exactly one half
    #[inline]
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }

    /// Exactly two
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T> Real for T where T: Float + FloatConst + Debug + Send + Sync + 'static {}
