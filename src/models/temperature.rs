use chrono::Month;

use crate::models::Season;

/// A single monthly temperature reading for one station.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRecord {
    pub station: String,
    pub month: Month,
    pub temperature: f64,
    pub season: Season,
}

impl TemperatureRecord {
    /// Build a record; the season is always derived from the month.
    pub fn new(station: impl Into<String>, month: Month, temperature: f64) -> Self {
        Self {
            station: station.into(),
            month,
            temperature,
            season: Season::from_month(month),
        }
    }
}

/// Parse a temperature cell.
///
/// Surrounding whitespace is ignored. Empty cells, non-numeric text and
/// non-finite values (`NaN`, `inf`) yield `None`.
pub fn parse_temperature(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|t| t.is_finite())
}
