pub mod coefficients;
pub mod ops;

use ndarray::{Array1, ArrayView1};

pub use coefficients::Coefficients;

use crate::{
    config::TrainingConfig,
    data::{MinMax, Samples},
    Result,
};

/// A univariate linear model fitted on min-max normalized data.
///
/// The samples and their normalized projections are fixed at construction, only the
/// coefficients change while training. Coefficients are in normalized scale until
/// `denormalize` consumes the model.
#[derive(Debug, Clone)]
pub struct LinearModel {
    xs: Array1<f64>,
    ys: Array1<f64>,
    xs_norm: Array1<f64>,
    ys_norm: Array1<f64>,
    x_bounds: MinMax,
    y_bounds: MinMax,

    theta: Coefficients,
    config: TrainingConfig,
}

impl LinearModel {
    /// Creates a new `LinearModel` with both coefficients at zero.
    ///
    /// # Arguments
    /// * `samples` - The fully loaded raw samples.
    /// * `config` - The bounds and step size of the training run.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` doesn't validate
    /// - `DegenerateInput` if either variable is constant across `samples`
    pub fn new(samples: &Samples, config: TrainingConfig) -> Result<Self> {
        config.validate()?;

        let xs = Array1::from(samples.xs().to_vec());
        let ys = Array1::from(samples.ys().to_vec());

        let x_bounds = MinMax::fit("predictor", xs.view())?;
        let y_bounds = MinMax::fit("response", ys.view())?;

        Ok(Self {
            xs_norm: x_bounds.normalize(xs.view()),
            ys_norm: y_bounds.normalize(ys.view()),
            xs,
            ys,
            x_bounds,
            y_bounds,
            theta: Coefficients::default(),
            config,
        })
    }

    /// Mean squared error of the current coefficients over the normalized samples.
    pub fn cost(&self) -> f64 {
        ops::mse(self.theta, self.xs_norm.view(), self.ys_norm.view())
    }

    /// Batch gradient of the cost with respect to `(intercept, slope)`.
    pub fn gradient(&self) -> (f64, f64) {
        ops::mse_grad(self.theta, self.xs_norm.view(), self.ys_norm.view())
    }

    /// Takes one step against the gradient, scaled by the learning rate.
    pub fn update(&mut self, d_intercept: f64, d_slope: f64) {
        let lr = self.config.learning_rate;

        self.theta.intercept -= lr * d_intercept;
        self.theta.slope -= lr * d_slope;
    }

    /// Maps the normalized-scale coefficients back onto raw units.
    ///
    /// Substituting `x' = (x - min_x) / (max_x - min_x)` and
    /// `y = min_y + (max_y - min_y) * y'` into `y' = t0 + t1 * x'` gives
    ///
    /// - slope = t1 * (max_y - min_y) / (max_x - min_x)
    /// - intercept = min_y + (max_y - min_y) * t0 - slope * min_x
    pub fn denormalize(self) -> Coefficients {
        let Self {
            x_bounds: x,
            y_bounds: y,
            theta,
            ..
        } = self;

        let slope = theta.slope * (y.max - y.min) / (x.max - x.min);
        let intercept = y.min + (y.max - y.min) * theta.intercept - slope * x.min;

        Coefficients { intercept, slope }
    }

    /// The current coefficients, in normalized scale.
    #[inline]
    pub fn coefficients(&self) -> Coefficients {
        self.theta
    }

    #[inline]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn raw(&self) -> (ArrayView1<'_, f64>, ArrayView1<'_, f64>) {
        (self.xs.view(), self.ys.view())
    }

    pub fn normalized(&self) -> (ArrayView1<'_, f64>, ArrayView1<'_, f64>) {
        (self.xs_norm.view(), self.ys_norm.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegressionErr;

    fn samples(xs: &[f64], ys: &[f64]) -> Samples {
        Samples::new(xs.to_vec(), ys.to_vec()).unwrap()
    }

    fn model(xs: &[f64], ys: &[f64]) -> LinearModel {
        LinearModel::new(&samples(xs, ys), TrainingConfig::default()).unwrap()
    }

    #[test]
    fn starts_at_zero_with_normalized_projections() {
        let m = model(&[10.0, 20.0, 30.0], &[5.0, 1.0, 3.0]);
        assert_eq!(m.coefficients(), Coefficients::default());
        assert_eq!(m.len(), 3);

        let (xs, ys) = m.normalized();
        assert_eq!(xs.to_vec(), vec![0.0, 0.5, 1.0]);
        assert_eq!(ys.to_vec(), vec![1.0, 0.0, 0.5]);

        let (raw_xs, _) = m.raw();
        assert_eq!(raw_xs.to_vec(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn constant_response_is_rejected() {
        let res = LinearModel::new(
            &samples(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]),
            TrainingConfig::default(),
        );
        assert!(matches!(
            res,
            Err(RegressionErr::DegenerateInput {
                variable: "response",
                ..
            })
        ));
    }

    #[test]
    fn constant_predictor_is_rejected() {
        let res = LinearModel::new(
            &samples(&[2.0, 2.0], &[1.0, 3.0]),
            TrainingConfig::default(),
        );
        assert!(matches!(
            res,
            Err(RegressionErr::DegenerateInput {
                variable: "predictor",
                ..
            })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = TrainingConfig {
            learning_rate: 0.0,
            ..TrainingConfig::default()
        };
        let res = LinearModel::new(&samples(&[1.0, 2.0], &[1.0, 3.0]), cfg);
        assert!(matches!(res, Err(RegressionErr::InvalidConfig(_))));
    }

    #[test]
    fn cost_and_gradient_are_pure() {
        let m = model(&[1.0, 2.0, 4.0], &[3.0, 1.0, 2.0]);
        let cost = m.cost();
        let grad = m.gradient();

        assert_eq!(m.cost(), cost);
        assert_eq!(m.gradient(), grad);
        assert_eq!(m.coefficients(), Coefficients::default());
    }

    #[test]
    fn update_steps_against_the_gradient() {
        let mut m = model(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]);
        let (di, ds) = m.gradient();
        m.update(di, ds);

        let theta = m.coefficients();
        assert_eq!(theta.intercept, -0.1 * di);
        assert_eq!(theta.slope, -0.1 * ds);
    }

    #[test]
    fn identity_line_denormalizes_to_the_anchor_mapping() {
        let xs = [3.0, 7.0, 11.0, 5.0];
        let ys = [-2.0, 6.0, 14.0, 2.0];
        let mut m = model(&xs, &ys);
        m.theta = Coefficients::new(0.0, 1.0);

        let line = m.denormalize();

        // maps min_x -> min_y and max_x -> max_y
        assert!((line.predict(3.0) - -2.0).abs() < 1e-12);
        assert!((line.predict(11.0) - 14.0).abs() < 1e-12);
        assert!((line.slope - 2.0).abs() < 1e-12);
        assert!((line.intercept - -8.0).abs() < 1e-12);
    }

    #[test]
    fn denormalize_matches_the_closed_form() {
        let mut m = model(&[100.0, 300.0, 200.0], &[10.0, 50.0, 20.0]);
        let (t0, t1) = (0.25, -0.75);
        m.theta = Coefficients::new(t0, t1);

        let (min_x, max_x, min_y, max_y) = (100.0, 300.0, 10.0, 50.0);
        let slope = t1 * (max_y - min_y) / (max_x - min_x);
        let intercept = min_y + (max_y - min_y) * t0 - slope * min_x;

        let line = m.denormalize();
        assert_eq!(line.slope, slope);
        assert_eq!(line.intercept, intercept);
    }
}
