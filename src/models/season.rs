use chrono::Month;
use std::fmt;

use crate::utils::constants::MONTHS;

/// Southern-hemisphere meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    /// Report order, independent of the order seasons appear in the data.
    pub const ALL: [Season; 4] = [
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::Spring,
    ];

    pub fn from_month(month: Month) -> Self {
        match month {
            Month::December | Month::January | Month::February => Season::Summer,
            Month::March | Month::April | Month::May => Season::Autumn,
            Month::June | Month::July | Month::August => Season::Winter,
            Month::September | Month::October | Month::November => Season::Spring,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Match a header cell against the English month names.
///
/// Matching is exact and case-sensitive: `"january"` or `" January"` are not
/// month columns.
pub fn month_from_column(column: &str) -> Option<Month> {
    MONTHS.iter().copied().find(|m| m.name() == column)
}
