use std::fmt;

use serde::Serialize;

use crate::model::Coefficients;

/// How a training run stopped. Both variants are successful runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Termination {
    /// The cost improved by no more than the convergence threshold.
    Converged { iterations: usize },
    /// The iteration cap was reached first.
    Exhausted { iterations: usize },
}

impl Termination {
    /// The amount of update steps performed.
    pub fn iterations(&self) -> usize {
        match *self {
            Termination::Converged { iterations } | Termination::Exhausted { iterations } => {
                iterations
            }
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged { .. })
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged { iterations } => {
                write!(f, "converged at iterations: {iterations}")
            }
            Termination::Exhausted { iterations } => write!(
                f,
                "max iteration exceeded before converging ({iterations} iterations)"
            ),
        }
    }
}

/// The outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    /// The fitted line, in raw units.
    pub coefficients: Coefficients,
    pub termination: Termination,
    /// The last cost, measured on normalized data.
    pub final_cost: f64,
    /// The initial cost followed by the cost after every update, when the trainer was
    /// asked to record it.
    pub cost_history: Option<Vec<f64>>,
}
