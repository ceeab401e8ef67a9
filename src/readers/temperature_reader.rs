use crate::error::Result;
use crate::models::{month_from_column, parse_temperature, TemperatureRecord};
use crate::utils::constants::{DEFAULT_STATION_NAME, STATION_COLUMN};
use chrono::Month;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Where the station name and month readings live in one file's rows.
///
/// Resolved once from the header row; rows are then read by index.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub station_index: Option<usize>,
    pub month_columns: Vec<(Month, usize)>,
}

impl ColumnLayout {
    /// Intersect a header row with the known columns.
    ///
    /// Returns `None` when no month column is present. Month columns keep
    /// calendar order regardless of their position in the header. When a
    /// header name repeats, the rightmost column is the one read.
    pub fn from_headers(headers: &StringRecord) -> Option<Self> {
        let station_index = headers
            .iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rposition(|h| h == STATION_COLUMN);

        let mut month_columns: Vec<(Month, usize)> = Vec::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(month) = month_from_column(header) {
                match month_columns.iter_mut().find(|(m, _)| *m == month) {
                    Some(column) => column.1 = index,
                    None => month_columns.push((month, index)),
                }
            }
        }

        if month_columns.is_empty() {
            return None;
        }

        month_columns.sort_by_key(|(month, _)| month.number_from_month());

        Some(Self {
            station_index,
            month_columns,
        })
    }
}

/// Outcome of reading a single CSV file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContents {
    /// Header carried at least one month column.
    Records(Vec<TemperatureRecord>),
    /// Header carried no month column; the file is not a temperature table.
    NoMonthColumns,
}

pub struct TemperatureReader {
    default_station: String,
}

impl TemperatureReader {
    pub fn new() -> Self {
        Self {
            default_station: DEFAULT_STATION_NAME.to_string(),
        }
    }

    pub fn with_default_station(default_station: impl Into<String>) -> Self {
        Self {
            default_station: default_station.into(),
        }
    }

    /// Read temperature records from a CSV file with a header row.
    ///
    /// Cells that are empty or not a finite number are dropped silently.
    /// Errors opening or decoding the file are returned to the caller.
    pub fn read_temperatures(&self, path: &Path) -> Result<FileContents> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        self.read_from(reader)
    }

    /// Read temperature records from any CSV source.
    ///
    /// A row that cannot be decoded fails the whole source: records from
    /// the rows before it are discarded along with the rest, so a file
    /// contributes either all of its readings or none.
    pub fn read_from<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<FileContents> {
        let headers = reader.headers()?.clone();

        let Some(layout) = ColumnLayout::from_headers(&headers) else {
            return Ok(FileContents::NoMonthColumns);
        };

        let mut records = Vec::new();
        let mut discarded = 0usize;

        for row in reader.records() {
            let row = row?;
            let station = self.station_name(&row, &layout);

            for &(month, index) in &layout.month_columns {
                let cell = row.get(index).unwrap_or("");
                if cell.trim().is_empty() {
                    continue;
                }

                match parse_temperature(cell) {
                    Some(temperature) => {
                        records.push(TemperatureRecord::new(station.clone(), month, temperature))
                    }
                    None => discarded += 1,
                }
            }
        }

        if discarded > 0 {
            debug!("Discarded {} non-numeric temperature cells", discarded);
        }

        Ok(FileContents::Records(records))
    }

    fn station_name(&self, row: &StringRecord, layout: &ColumnLayout) -> String {
        layout
            .station_index
            .and_then(|index| row.get(index))
            .filter(|name| !name.is_empty())
            .unwrap_or(self.default_station.as_str())
            .to_string()
    }
}

impl Default for TemperatureReader {
    fn default() -> Self {
        Self::new()
    }
}
