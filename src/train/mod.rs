mod report;
mod trainer;

pub use report::{Termination, TrainingReport};
pub use trainer::Trainer;
