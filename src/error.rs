use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used across the regression crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression crate's error type.
#[derive(Debug)]
pub enum RegressionErr {
    /// A variable has the same minimum and maximum, so it cannot be min-max normalized.
    DegenerateInput {
        variable: &'static str,
        value: f64,
    },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    InvalidConfig(String),
    DatasetNotFound {
        path: PathBuf,
    },
    MalformedRow {
        line: usize,
        expected: usize,
        got: usize,
    },
    InvalidValue {
        line: usize,
        value: String,
    },
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::DegenerateInput { variable, value } => write!(
                f,
                "cannot normalize the {variable}: every sample equals {value}, min and max coincide"
            ),
            RegressionErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "there's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            RegressionErr::EmptyDataset => write!(f, "the dataset has no samples"),
            RegressionErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            RegressionErr::DatasetNotFound { path } => write!(
                f,
                "could not find the dataset, expected it at {}",
                path.display()
            ),
            RegressionErr::MalformedRow {
                line,
                expected,
                got,
            } => write!(
                f,
                "dataset line {line}: expected {expected} values, got {got}"
            ),
            RegressionErr::InvalidValue { line, value } => {
                write!(f, "dataset line {line}: cannot parse '{value}' as a number")
            }
            RegressionErr::Io(e) => write!(f, "io error: {e}"),
            RegressionErr::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl Error for RegressionErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegressionErr::Io(e) => Some(e),
            RegressionErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RegressionErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RegressionErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
