use crate::analyzers::grouping::group_by_station;
use crate::models::{StationExtremes, TemperatureRecord};
use crate::utils::constants::{TEMPERATURE_UNIT, TIE_TOLERANCE};
use crate::utils::stats::within_tolerance;
use crate::writers::Report;

#[derive(Debug, Clone, PartialEq)]
pub struct StationRange {
    pub station: String,
    pub extremes: StationExtremes,
}

impl StationRange {
    pub fn range(&self) -> f64 {
        self.extremes.range()
    }
}

/// Station(s) whose temperature range ties for the largest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeReport {
    pub max_range: Option<f64>,
    pub winners: Vec<StationRange>,
}

impl Report for RangeReport {
    fn lines(&self) -> Vec<String> {
        self.winners
            .iter()
            .map(|w| {
                format!(
                    "{}: Range {:.1}{unit} (Max: {:.1}{unit}, Min: {:.1}{unit})",
                    w.station,
                    w.range(),
                    w.extremes.max,
                    w.extremes.min,
                    unit = TEMPERATURE_UNIT
                )
            })
            .collect()
    }
}

pub struct RangeAnalyzer {
    tolerance: f64,
}

impl RangeAnalyzer {
    pub fn new() -> Self {
        Self {
            tolerance: TIE_TOLERANCE,
        }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn analyze(&self, records: &[TemperatureRecord]) -> RangeReport {
        let ranges: Vec<StationRange> = group_by_station(records)
            .into_iter()
            .filter_map(|(station, temps)| {
                Some(StationRange {
                    station: station.to_string(),
                    extremes: StationExtremes::from_temperatures(temps)?,
                })
            })
            .collect();

        let Some(max_range) = ranges.iter().map(StationRange::range).reduce(f64::max) else {
            return RangeReport::default();
        };

        // Near-equal ranges are all winners, so accumulated rounding does
        // not drop a tied station.
        let winners = ranges
            .into_iter()
            .filter(|r| within_tolerance(r.range(), max_range, self.tolerance))
            .collect();

        RangeReport {
            max_range: Some(max_range),
            winners,
        }
    }
}

impl Default for RangeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
