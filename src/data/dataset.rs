use serde::Serialize;

use crate::{RegressionErr, Result};

/// A single (predictor, response) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// A fully loaded, immutable sample set.
///
/// Stored as two parallel buffers so the model can view each variable as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Samples {
    /// Creates a new sample set from owned buffers.
    ///
    /// # Errors
    /// - `SizeMismatch` if `xs.len() != ys.len()`
    /// - `EmptyDataset` if there are no samples
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(RegressionErr::SizeMismatch {
                a: "predictors",
                b: "responses",
                got: ys.len(),
                expected: xs.len(),
            });
        }

        if xs.is_empty() {
            return Err(RegressionErr::EmptyDataset);
        }

        Ok(Self { xs, ys })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the sample at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<Sample> {
        Some(Sample {
            x: *self.xs.get(idx)?,
            y: *self.ys.get(idx)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Sample { x, y })
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}
