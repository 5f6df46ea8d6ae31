//! Shape handling shared by kernels and losses
//!
//! Kernels work on the *squeezed* view of their input: a scalar stays 0-D,
//! and every axis of length one is dropped, so `[[1.0, 2.0]]` is evaluated as
//! the 1-D `[1.0, 2.0]`. Losses pair two arrays with NumPy broadcasting.

use crate::error::{Error, Result};
use crate::numeric::Real;
use ndarray::{ArrayBase, ArrayD, Axis, Data, Dimension, IxDyn, Zip};
use tracing::trace;

/// Element count above which the `parallel` feature switches to rayon
///
/// Below it, or on a single-thread pool, evaluation stays sequential.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Copy `x` into a dynamic-rank array with all length-1 axes removed
pub fn squeeze<F, S, D>(x: &ArrayBase<S, D>) -> ArrayD<F>
where
    F: Clone,
    S: Data<Elem = F>,
    D: Dimension,
{
    let mut out = x.to_owned().into_dyn();
    for axis in (0..out.ndim()).rev() {
        if out.len_of(Axis(axis)) == 1 {
            out = out.index_axis_move(Axis(axis), 0);
        }
    }
    out
}

/// Apply `f` to every element in place
pub fn map_inplace<F, G>(values: &mut ArrayD<F>, f: G)
where
    F: Real,
    G: Fn(F) -> F + Send + Sync,
{
    #[cfg(feature = "parallel")]
    if values.len() >= PARALLEL_THRESHOLD && rayon::current_num_threads() > 1 {
        values.par_mapv_inplace(f);
        return;
    }
    values.mapv_inplace(f);
}

/// Map every element of `x` through `f`, keeping its shape
pub fn map_elementwise<F, S, D, G>(x: &ArrayBase<S, D>, f: G) -> ArrayD<F>
where
    F: Real,
    S: Data<Elem = F>,
    D: Dimension,
    G: Fn(F) -> F + Send + Sync,
{
    let mut out = x.to_owned().into_dyn();
    map_inplace(&mut out, f);
    out
}

/// Squeeze `x` and map every element through `f`
pub fn map_squeezed<F, S, D, G>(x: &ArrayBase<S, D>, f: G) -> ArrayD<F>
where
    F: Real,
    S: Data<Elem = F>,
    D: Dimension,
    G: Fn(F) -> F + Send + Sync,
{
    let mut out = squeeze(x);
    map_inplace(&mut out, f);
    out
}

/// Shape produced by broadcasting `left` against `right`
///
/// Shapes are aligned on their trailing axes; a pair of axes is compatible
/// when the lengths match or one of them is 1.
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> Result<Vec<usize>> {
    let ndim = left.len().max(right.len());
    let mut shape = vec![0; ndim];
    for i in 0..ndim {
        let l = axis_len(left, ndim, i);
        let r = axis_len(right, ndim, i);
        shape[i] = match (l, r) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => return Err(Error::shape_mismatch(left, right)),
        };
    }
    Ok(shape)
}

/// Length of axis `i` of `shape` once left-padded with ones up to `ndim` axes
fn axis_len(shape: &[usize], ndim: usize, i: usize) -> usize {
    let pad = ndim - shape.len();
    if i < pad {
        1
    } else {
        shape[i - pad]
    }
}

/// Broadcast `y1` against `y2` and combine them elementwise through `f`
pub fn zip_broadcast<F, S1, D1, S2, D2, G>(
    y1: &ArrayBase<S1, D1>,
    y2: &ArrayBase<S2, D2>,
    f: G,
) -> Result<ArrayD<F>>
where
    F: Real,
    S1: Data<Elem = F>,
    D1: Dimension,
    S2: Data<Elem = F>,
    D2: Dimension,
    G: Fn(F, F) -> F + Send + Sync,
{
    let shape = broadcast_shape(y1.shape(), y2.shape())?;
    if y1.shape() != y2.shape() {
        trace!(left = ?y1.shape(), right = ?y2.shape(), out = ?shape, "broadcasting operands");
    }
    let lhs = y1
        .broadcast(IxDyn(&shape))
        .ok_or_else(|| Error::shape_mismatch(y1.shape(), y2.shape()))?;
    let rhs = y2
        .broadcast(IxDyn(&shape))
        .ok_or_else(|| Error::shape_mismatch(y1.shape(), y2.shape()))?;

    #[cfg(feature = "parallel")]
    if lhs.len() >= PARALLEL_THRESHOLD && rayon::current_num_threads() > 1 {
        return Ok(Zip::from(&lhs)
            .and(&rhs)
            .par_map_collect(|&a, &b| f(a, b)));
    }
    Ok(Zip::from(&lhs).and(&rhs).map_collect(|&a, &b| f(a, b)))
}
