//! Univariate linear regression fitted by batch gradient descent on min-max normalized data.
//!
//! ```no_run
//! use linear_regression::{fit, data::Samples, config::TrainingConfig};
//!
//! let samples = Samples::new(vec![1.0, 2.0, 3.0, 4.0], vec![2.0, 4.0, 6.0, 8.0])?;
//! let report = fit(&samples, TrainingConfig::default())?;
//! println!("{}: {:?}", report.termination, report.coefficients);
//! # Ok::<(), linear_regression::RegressionErr>(())
//! ```
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod persist;
pub mod runtime;
pub mod train;

pub use config::{ConfigOverrides, TrainingConfig};
pub use error::{RegressionErr, Result};
pub use model::{Coefficients, LinearModel};
pub use train::{Termination, Trainer, TrainingReport};

use data::Samples;

/// Builds a model over `samples` and trains it to completion.
///
/// # Errors
/// Only at construction: an invalid `config` or a degenerate variable.
pub fn fit(samples: &Samples, config: TrainingConfig) -> Result<TrainingReport> {
    let model = LinearModel::new(samples, config)?;
    Ok(Trainer::new(model).train())
}
