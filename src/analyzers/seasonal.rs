use crate::analyzers::grouping::group_by;
use crate::models::{Season, TemperatureRecord};
use crate::utils::constants::TEMPERATURE_UNIT;
use crate::utils::stats::mean;
use crate::writers::Report;

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalAverage {
    pub season: Season,
    pub mean: f64,
    pub samples: usize,
}

/// Mean temperature per season, in Summer, Autumn, Winter, Spring order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonalReport {
    pub averages: Vec<SeasonalAverage>,
}

impl SeasonalReport {
    pub fn get(&self, season: Season) -> Option<&SeasonalAverage> {
        self.averages.iter().find(|a| a.season == season)
    }
}

impl Report for SeasonalReport {
    fn lines(&self) -> Vec<String> {
        self.averages
            .iter()
            .map(|a| format!("{}: {:.1}{}", a.season, a.mean, TEMPERATURE_UNIT))
            .collect()
    }
}

pub struct SeasonalAnalyzer;

impl SeasonalAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, records: &[TemperatureRecord]) -> SeasonalReport {
        let groups = group_by(records, |r| r.season);

        let averages = Season::ALL
            .iter()
            .filter_map(|season| {
                let (_, temps) = groups.iter().find(|(s, _)| s == season)?;
                Some(SeasonalAverage {
                    season: *season,
                    mean: mean(temps)?,
                    samples: temps.len(),
                })
            })
            .collect();

        SeasonalReport { averages }
    }
}

impl Default for SeasonalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn test_seasonal_means_in_fixed_order() {
        let records = vec![
            TemperatureRecord::new("A", Month::October, 20.0),
            TemperatureRecord::new("A", Month::July, 4.0),
            TemperatureRecord::new("A", Month::August, 6.0),
            TemperatureRecord::new("B", Month::January, 10.0),
            TemperatureRecord::new("B", Month::February, 20.0),
        ];

        let report = SeasonalAnalyzer::new().analyze(&records);

        assert_eq!(
            report.lines(),
            vec!["Summer: 15.0°C", "Winter: 5.0°C", "Spring: 20.0°C"]
        );
        assert!(report.get(Season::Autumn).is_none());
        assert_eq!(report.get(Season::Winter).map(|a| a.samples), Some(2));
    }

    #[test]
    fn test_single_record_mean_is_exact() {
        let records = vec![TemperatureRecord::new("A", Month::April, 17.23)];

        let report = SeasonalAnalyzer::new().analyze(&records);

        assert_eq!(report.averages[0].mean, 17.23);
        assert_eq!(report.lines(), vec!["Autumn: 17.2°C"]);
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let report = SeasonalAnalyzer::new().analyze(&[]);
        assert!(report.averages.is_empty());
        assert!(report.lines().is_empty());
    }
}
