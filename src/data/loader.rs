use std::{io, path::Path};

use log::debug;

use super::Samples;
use crate::{RegressionErr, Result};

const COLUMNS: usize = 2;

/// Parses a delimited dataset: one header line, then `predictor,response` rows.
///
/// Blank lines are skipped. Line numbers in errors are 1-based and count the header.
///
/// # Errors
/// - `MalformedRow` if a row doesn't have exactly two values
/// - `InvalidValue` if a value isn't a finite number
/// - `EmptyDataset` if there are no rows after the header
pub fn parse_samples(content: &str) -> Result<Samples> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (i, line) in content.lines().enumerate().skip(1) {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = line
            .split(',')
            .map(|v| parse_value(line_no, v))
            .collect::<Result<Vec<_>>>()?;

        let &[x, y] = values.as_slice() else {
            return Err(RegressionErr::MalformedRow {
                line: line_no,
                expected: COLUMNS,
                got: values.len(),
            });
        };

        xs.push(x);
        ys.push(y);
    }

    Samples::new(xs, ys)
}

fn parse_value(line: usize, raw: &str) -> Result<f64> {
    let raw = raw.trim();

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RegressionErr::InvalidValue {
            line,
            value: raw.to_string(),
        }),
    }
}

/// Reads and parses the dataset at `path`.
///
/// # Errors
/// `DatasetNotFound` if there's no file at `path`, otherwise whatever `parse_samples` reports.
pub async fn load_samples<P: AsRef<Path>>(path: P) -> Result<Samples> {
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RegressionErr::DatasetNotFound {
            path: path.to_path_buf(),
        },
        _ => RegressionErr::Io(e),
    })?;

    let samples = parse_samples(&content)?;
    debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
