use chrono::Month;

/// Column names
pub const STATION_COLUMN: &str = "STATION_NAME";

/// Month columns, in calendar order
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Station name used when a row carries none
pub const DEFAULT_STATION_NAME: &str = "Unknown";

/// Absolute difference below which two aggregate temperatures rank as equal
pub const TIE_TOLERANCE: f64 = 0.001;

/// Input discovery
pub const CSV_EXTENSION: &str = "csv";
pub const DEFAULT_DATA_DIR: &str = "temperatures";

/// Report file names
pub const SEASONAL_REPORT_FILE: &str = "average_temp.txt";
pub const RANGE_REPORT_FILE: &str = "largest_temp_range_station.txt";
pub const STABILITY_REPORT_FILE: &str = "temperature_stability_stations.txt";

/// Configuration
pub const ENV_PREFIX: &str = "WEATHER_STATS";
pub const TEMPERATURE_UNIT: &str = "°C";
