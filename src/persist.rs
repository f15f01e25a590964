use std::{io, path::Path};

use log::{debug, warn};
use serde::Serialize;

use crate::{
    data::{Sample, Samples},
    model::Coefficients,
    RegressionErr, Result,
};

/// Formats coefficients as the single `intercept,slope` line of a thetas file.
pub fn format_coefficients(coef: &Coefficients) -> String {
    format!("{},{}", coef.intercept, coef.slope)
}

/// Parses the `intercept,slope` line of a thetas file.
pub fn parse_coefficients(content: &str) -> Result<Coefficients> {
    let line = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("");

    let values = line
        .split(',')
        .map(|v| {
            let v = v.trim();
            v.parse::<f64>().map_err(|_| RegressionErr::InvalidValue {
                line: 1,
                value: v.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let &[intercept, slope] = values.as_slice() else {
        return Err(RegressionErr::MalformedRow {
            line: 1,
            expected: 2,
            got: values.len(),
        });
    };

    Ok(Coefficients { intercept, slope })
}

/// Writes the fitted coefficients to `path`, replacing any previous file.
pub async fn write_coefficients<P: AsRef<Path>>(path: P, coef: &Coefficients) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, format_coefficients(coef)).await?;
    debug!("coefficients written to {}", path.display());
    Ok(())
}

/// Reads coefficients back from `path`.
///
/// A missing file means the model was never trained, which predicts with a flat zero line.
pub async fn read_coefficients<P: AsRef<Path>>(path: P) -> Result<Coefficients> {
    let path = path.as_ref();

    match tokio::fs::read_to_string(path).await {
        Ok(content) => parse_coefficients(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("no coefficients at {}, using an untrained model", path.display());
            Ok(Coefficients::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Everything an external renderer needs to draw the samples and the fitted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotData {
    pub samples: Vec<Sample>,
    /// The fitted line evaluated at the predictor's minimum and maximum.
    pub line: [Sample; 2],
    pub coefficients: Coefficients,
}

impl PlotData {
    pub fn new(samples: &Samples, coefficients: Coefficients) -> Self {
        let (lo, hi) = samples
            .xs()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        let at = |x| Sample {
            x,
            y: coefficients.predict(x),
        };

        Self {
            samples: samples.iter().collect(),
            line: [at(lo), at(hi)],
            coefficients,
        }
    }

    /// Writes the plot data as pretty JSON to `path`.
    pub async fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
