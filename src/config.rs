use std::{num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{RegressionErr, Result};

const DEFAULT_MAX_ITERATION: NonZeroUsize = match NonZeroUsize::new(10_000) {
    Some(n) => n,
    None => panic!("the default max_iteration must be non-zero"),
};
const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-5;
const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Per-value overrides layered on top of a `TrainingConfig`, typically from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ConfigOverrides {
    pub max_iteration: Option<NonZeroUsize>,
    pub convergence_threshold: Option<f64>,
    pub learning_rate: Option<f64>,
}

/// Immutable bounds and step size for a single training run.
///
/// Every field has a default, so a JSON file only needs the values it overrides:
///
/// ```json
/// { "learning_rate": 0.05, "max_iteration": 2000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    /// Hard cap on the loop's iteration counter.
    pub max_iteration: NonZeroUsize,
    /// Absolute cost delta under which the run counts as converged.
    pub convergence_threshold: f64,
    /// Scale of each gradient step.
    pub learning_rate: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_iteration: DEFAULT_MAX_ITERATION,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}

impl TrainingConfig {
    /// Creates a new configuration and validates it.
    ///
    /// # Arguments
    /// * `max_iteration` - The hard cap on loop iterations.
    /// * `convergence_threshold` - The absolute cost delta considered converged.
    /// * `learning_rate` - The *length* of the steps taken on each update.
    ///
    /// # Errors
    /// `InvalidConfig` if either real is not strictly positive and finite.
    pub fn new(
        max_iteration: NonZeroUsize,
        convergence_threshold: f64,
        learning_rate: f64,
    ) -> Result<Self> {
        let cfg = Self {
            max_iteration,
            convergence_threshold,
            learning_rate,
        };

        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that both reals are strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        check_positive("convergence_threshold", self.convergence_threshold)?;
        check_positive("learning_rate", self.learning_rate)
    }

    /// Parses and validates a configuration from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and validates a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Replaces every value `overrides` sets and validates the result.
    pub fn merge(self, overrides: ConfigOverrides) -> Result<Self> {
        let cfg = Self {
            max_iteration: overrides.max_iteration.unwrap_or(self.max_iteration),
            convergence_threshold: overrides
                .convergence_threshold
                .unwrap_or(self.convergence_threshold),
            learning_rate: overrides.learning_rate.unwrap_or(self.learning_rate),
        };

        cfg.validate()?;
        Ok(cfg)
    }

    /// Resolves the configuration of a run: defaults, then the JSON file at `path` if any,
    /// then `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        base.merge(overrides)
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }

    Err(RegressionErr::InvalidConfig(format!(
        "{name} must be a positive finite number, got {value}"
    )))
}
