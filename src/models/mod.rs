pub mod season;
pub mod station;
pub mod temperature;

pub use season::{month_from_column, Season};
pub use station::StationExtremes;
pub use temperature::{parse_temperature, TemperatureRecord};
