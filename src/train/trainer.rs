use log::debug;

use super::{Termination, TrainingReport};
use crate::model::LinearModel;

/// Drives batch gradient descent over a `LinearModel` until it converges or runs out of
/// iterations.
///
/// The trainer owns the model for the whole run. Every iteration makes one full pass over
/// the normalized samples to compute the gradient, takes one step and measures the new
/// cost. The run stops when the absolute cost delta drops to the convergence threshold or
/// when the iteration counter, which starts at 1, reaches `max_iteration`. The cap is
/// checked last and wins over convergence on the same iteration.
pub struct Trainer {
    model: LinearModel,
    record_costs: bool,
}

impl Trainer {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `model` - The model to be fitted, its configuration bounds the run.
    pub fn new(model: LinearModel) -> Self {
        Self {
            model,
            record_costs: false,
        }
    }

    /// Keeps the cost of every iteration in the report.
    ///
    /// The history holds one value per update, up to `max_iteration` of them.
    pub fn record_costs(mut self) -> Self {
        self.record_costs = true;
        self
    }

    /// Runs the loop to completion and denormalizes the result.
    ///
    /// # Returns
    /// The raw-scale coefficients along with how and when the run stopped.
    pub fn train(mut self) -> TrainingReport {
        let cfg = *self.model.config();
        let max_iteration = cfg.max_iteration.get();
        let threshold = cfg.convergence_threshold;

        debug!(
            samples = self.model.len(),
            max_iteration = max_iteration,
            learning_rate = cfg.learning_rate;
            "starting gradient descent"
        );

        let mut cost = self.model.cost();
        let mut cost_history = self.record_costs.then(|| vec![cost]);
        let mut iteration = 1;

        let termination = loop {
            let (d_intercept, d_slope) = self.model.gradient();
            self.model.update(d_intercept, d_slope);

            let new_cost = self.model.cost();
            if let Some(history) = cost_history.as_mut() {
                history.push(new_cost);
            }

            let converged = (cost - new_cost).abs() <= threshold;
            cost = new_cost;
            iteration += 1;

            let iterations = iteration - 1;
            if iteration >= max_iteration {
                break Termination::Exhausted { iterations };
            }

            if converged {
                break Termination::Converged { iterations };
            }
        };

        debug!("gradient descent stopped: {termination}, cost={cost}");

        TrainingReport {
            coefficients: self.model.denormalize(),
            termination,
            final_cost: cost,
            cost_history,
        }
    }
}
