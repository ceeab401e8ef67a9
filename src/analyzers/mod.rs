pub mod grouping;
pub mod range;
pub mod seasonal;
pub mod stability;

pub use grouping::{group_by, group_by_station};
pub use range::{RangeAnalyzer, RangeReport, StationRange};
pub use seasonal::{SeasonalAnalyzer, SeasonalAverage, SeasonalReport};
pub use stability::{StabilityAnalyzer, StabilityReport, StationDeviation};
