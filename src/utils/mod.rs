pub mod constants;
pub mod progress;
pub mod stats;

pub use constants::*;
pub use progress::ProgressReporter;
pub use stats::{mean, sample_std_dev, within_tolerance};
