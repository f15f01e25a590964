//! Batch kernels for the mean squared error of a line.
use ndarray::{ArrayView1, Zip};

use super::Coefficients;

/// Computes the mean squared error of `coef` over the whole batch:
///
/// cost = (1/m) * sum_i (pred_i - y_i)^2
pub fn mse(coef: Coefficients, xs: ArrayView1<f64>, ys: ArrayView1<f64>) -> f64 {
    let m = xs.len() as f64;

    let sum = Zip::from(xs).and(ys).fold(0.0, |acc, &x, &y| {
        let err = coef.predict(x) - y;
        acc + err * err
    });

    sum / m
}

/// Computes the batch gradient of the cost with respect to `(intercept, slope)`:
///
/// - d_intercept = (1/m) * sum_i err_i
/// - d_slope = (1/m) * sum_i (err_i * x_i)
///
/// The constant factor 2 of the exact derivative is left out, it is absorbed by the
/// learning rate.
pub fn mse_grad(coef: Coefficients, xs: ArrayView1<f64>, ys: ArrayView1<f64>) -> (f64, f64) {
    let m = xs.len() as f64;

    let (d_intercept, d_slope) = Zip::from(xs).and(ys).fold((0.0, 0.0), |(di, ds), &x, &y| {
        let err = coef.predict(x) - y;
        (di + err, ds + err * x)
    });

    (d_intercept / m, d_slope / m)
}
