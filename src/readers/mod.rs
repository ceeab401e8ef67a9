pub mod directory_reader;
pub mod temperature_reader;

pub use directory_reader::{DirectoryReader, LoadSummary};
pub use temperature_reader::{ColumnLayout, FileContents, TemperatureReader};
