use ndarray::{Array1, ArrayView1};

use crate::{RegressionErr, Result};

/// The observed bounds of one variable, used for min-max normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Computes the bounds of `values`.
    ///
    /// # Arguments
    /// * `variable` - The name reported if the bounds are degenerate.
    /// * `values` - The raw values of the variable.
    ///
    /// # Errors
    /// - `EmptyDataset` if `values` is empty
    /// - `DegenerateInput` if every value is the same, which would divide by zero
    pub fn fit(variable: &'static str, values: ArrayView1<f64>) -> Result<Self> {
        let mut iter = values.iter().copied();
        let first = iter.next().ok_or(RegressionErr::EmptyDataset)?;

        let (min, max) = iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));

        if max == min {
            return Err(RegressionErr::DegenerateInput {
                variable,
                value: min,
            });
        }

        Ok(Self { min, max })
    }

    /// The width of the observed range, never zero.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Rescales `values` into `[0, 1]`.
    pub fn normalize(&self, values: ArrayView1<f64>) -> Array1<f64> {
        let span = self.span();
        values.mapv(|v| (v - self.min) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn normalized_values_span_the_unit_interval() {
        let values = array![240000.0, 139800.0, 150500.0, 22899.0];
        let bounds = MinMax::fit("predictor", values.view()).unwrap();
        assert_eq!(bounds.min, 22899.0);
        assert_eq!(bounds.max, 240000.0);

        let normalized = bounds.normalize(values.view());
        let min = normalized.fold(f64::INFINITY, |a, &b| a.min(b));
        let max = normalized.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
        assert!(normalized.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn constant_values_are_degenerate() {
        let values = array![4.0, 4.0, 4.0];
        let res = MinMax::fit("response", values.view());
        assert!(matches!(
            res,
            Err(RegressionErr::DegenerateInput {
                variable: "response",
                value
            }) if value == 4.0
        ));
    }

    #[test]
    fn single_sample_is_degenerate() {
        let values = array![1.5];
        assert!(MinMax::fit("predictor", values.view()).is_err());
    }
}
