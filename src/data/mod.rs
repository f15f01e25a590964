pub mod dataset;
pub mod loader;
pub mod normalize;

pub use dataset::{Sample, Samples};
pub use loader::{load_samples, parse_samples};
pub use normalize::MinMax;
