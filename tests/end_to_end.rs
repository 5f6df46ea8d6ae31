//! End-to-end scenarios through the facade crate
//!
//! These mirror how an experiment driver uses the toolkit: build a kernel and
//! a loss from configuration, blur a sparse spike train, and take gradients
//! of the loss with respect to the prediction.

mod common;

use common::{assert_relative_eq, init_tracing, normal_samples};
use ndarray::{Array1, Array2, Axis};
use sparse_deconv::prelude::*;
use std::f64::consts::PI;

/// Forward model: y(t) = Σ_i w_i K(t - p_i)
fn forward<K: Kernel>(kernel: &K, grid: &Array1<f64>, positions: &[f64], weights: &[f64]) -> Array1<f64> {
    let mut y = Array1::zeros(grid.len());
    for (&p, &w) in positions.iter().zip(weights) {
        y += &(kernel.evaluate(&grid.mapv(|t| t - p)) * w);
    }
    y
}

#[test]
fn test_reference_values() {
    init_tracing();
    let dirichlet = KernelConfig::from_json(r#"{"family": "dirichlet", "order": 2}"#)
        .unwrap()
        .build::<f64>()
        .unwrap();
    assert_relative_eq!(dirichlet.evaluate_at(0.0), 5.0 / (2.0 * PI));
    assert_relative_eq!(dirichlet.evaluate_at(PI), 1.0 / (2.0 * PI), epsilon = 1e-12);

    let gaussian = AnyKernel::<f64>::new(KernelFamily::Gaussian, 1.0).unwrap();
    assert_relative_eq!(gaussian.evaluate_at(0.0), 1.0 / (2.0 * PI).sqrt(), epsilon = 1e-15);
}

#[test]
fn test_periodic_forward_model_on_grid() {
    init_tracing();
    let kernel = DirichletKernel::<f64>::new(6).unwrap();
    let grid = Array1::linspace(0.0, 2.0 * PI, 200);
    let positions = [0.0, 1.0, 4.0];
    let weights = [1.0, -0.7, 0.4];

    let y = forward(&kernel, &grid, &positions, &weights);
    assert_eq!(y.len(), 200);
    assert!(y.iter().all(|v| v.is_finite()));

    // The spike at t = 0 lands exactly on the singular grid point
    let expected_at_zero = weights[0] * kernel.peak()
        + weights[1] * kernel.evaluate_at(-1.0)
        + weights[2] * kernel.evaluate_at(-4.0);
    assert_relative_eq!(y[0], expected_at_zero, epsilon = 1e-12);
}

#[test]
fn test_gradient_step_reduces_squared_loss() {
    init_tracing();
    let kernel = GaussianKernel::<f64>::new(0.05).unwrap();
    let loss = LossConfig::Squared.build::<f64>();
    let grid = Array1::linspace(0.0, 1.0, 128);

    let truth = forward(&kernel, &grid, &[0.3, 0.6], &[1.0, 0.5]);
    let noise = Array1::from(normal_samples(grid.len(), 7)) * 1e-3;
    let observed = &truth + &noise;

    let prediction = forward(&kernel, &grid, &[0.3, 0.6], &[0.8, 0.8]);
    let before = loss.loss(&prediction, &observed).unwrap().sum();
    let grad = loss.derivative(&prediction, &observed).unwrap();
    let stepped = &prediction - &(grad * 0.5);
    let after = loss.loss(&stepped, &observed).unwrap().sum();
    assert!(after < before, "loss went from {before} to {after}");
}

#[test]
fn test_batched_loss_over_rows() {
    init_tracing();
    let loss = AnyLoss::<f64>::new(LossFamily::Logistic);
    let predictions = Array2::from_shape_fn((3, 5), |(i, j)| i as f64 - j as f64 * 0.5);
    let labels = Array1::from(vec![1.0, -1.0, 1.0, -1.0, 1.0]);

    let per_entry = loss.loss(&predictions, &labels).unwrap();
    assert_eq!(per_entry.shape(), &[3, 5]);
    let per_row = per_entry.sum_axis(Axis(1));
    assert_eq!(per_row.len(), 3);
    assert!(per_row.iter().all(|v| v.is_finite() && *v > 0.0));

    let grad = loss.derivative(&predictions, &labels).unwrap();
    assert_eq!(grad.shape(), &[3, 5]);
}

#[test]
fn test_invalid_configuration_fails_early() {
    init_tracing();
    let err = KernelConfig::Dirichlet { order: 0.5 }.build::<f64>().unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));

    let err = KernelConfig::Gaussian { sigma: -2.0 }.build::<f64>().unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[test]
fn test_f32_pipeline() {
    init_tracing();
    let kernel = DirichletKernel::<f32>::new(3).unwrap();
    let loss = Squared::<f32>::new();
    let x = Array1::linspace(-3.0f32, 3.0, 7);
    let y = kernel.evaluate(&x);
    let grad = loss.derivative(&y, &y).unwrap();
    assert!(grad.iter().all(|&g| g == 0.0));
}
