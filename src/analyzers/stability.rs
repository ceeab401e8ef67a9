use crate::analyzers::grouping::group_by_station;
use crate::error::{ProcessingError, Result};
use crate::models::TemperatureRecord;
use crate::utils::constants::{TEMPERATURE_UNIT, TIE_TOLERANCE};
use crate::utils::stats::{sample_std_dev, within_tolerance};
use crate::writers::Report;

#[derive(Debug, Clone, PartialEq)]
pub struct StationDeviation {
    pub station: String,
    pub std_dev: f64,
    pub samples: usize,
}

/// Most stable and most variable stations by sample standard deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityReport {
    pub most_stable: Vec<StationDeviation>,
    pub most_variable: Vec<StationDeviation>,
    /// Stations left out for having fewer than two readings.
    pub excluded: usize,
}

impl Report for StabilityReport {
    fn lines(&self) -> Vec<String> {
        let line = |label: &str, d: &StationDeviation| {
            format!(
                "{}: {}: StdDev {:.1}{}",
                label, d.station, d.std_dev, TEMPERATURE_UNIT
            )
        };

        self.most_stable
            .iter()
            .map(|d| line("Most Stable", d))
            .chain(self.most_variable.iter().map(|d| line("Most Variable", d)))
            .collect()
    }
}

pub struct StabilityAnalyzer {
    tolerance: f64,
}

impl StabilityAnalyzer {
    pub fn new() -> Self {
        Self {
            tolerance: TIE_TOLERANCE,
        }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Rank stations with at least two readings by standard deviation.
    ///
    /// Returns `InsufficientData` when no station qualifies.
    pub fn analyze(&self, records: &[TemperatureRecord]) -> Result<StabilityReport> {
        let groups = group_by_station(records);
        let total = groups.len();

        let deviations: Vec<StationDeviation> = groups
            .into_iter()
            .filter_map(|(station, temps)| {
                Some(StationDeviation {
                    station: station.to_string(),
                    std_dev: sample_std_dev(&temps)?,
                    samples: temps.len(),
                })
            })
            .collect();

        let stds = deviations.iter().map(|d| d.std_dev);
        let (Some(min_std), Some(max_std)) = (stds.clone().reduce(f64::min), stds.reduce(f64::max))
        else {
            return Err(ProcessingError::InsufficientData(
                "need more than one record per station to calculate stability".to_string(),
            ));
        };

        let select = |target: f64| -> Vec<StationDeviation> {
            deviations
                .iter()
                .filter(|d| within_tolerance(d.std_dev, target, self.tolerance))
                .cloned()
                .collect()
        };

        Ok(StabilityReport {
            most_stable: select(min_std),
            most_variable: select(max_std),
            excluded: total - deviations.len(),
        })
    }
}

impl Default for StabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
