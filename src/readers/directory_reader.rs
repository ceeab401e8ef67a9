use crate::error::Result;
use crate::models::TemperatureRecord;
use crate::readers::{FileContents, TemperatureReader};
use crate::utils::constants::CSV_EXTENSION;
use crate::utils::progress::ProgressReporter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Records loaded from a directory, with per-file bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    pub records: Vec<TemperatureRecord>,
    pub files_found: usize,
    pub files_read: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
}

impl LoadSummary {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Files: {} found, {} read, {} skipped (no month columns), {} failed\n\
            Records: {}",
            self.files_found,
            self.files_read,
            self.files_skipped,
            self.files_failed,
            self.records.len()
        )
    }
}

/// Loads every `.csv` temperature table in a directory.
pub struct DirectoryReader {
    reader: TemperatureReader,
}

impl DirectoryReader {
    pub fn new() -> Self {
        Self {
            reader: TemperatureReader::new(),
        }
    }

    pub fn with_reader(reader: TemperatureReader) -> Self {
        Self { reader }
    }

    /// List regular files with a `.csv` extension, sorted by path.
    pub fn discover_csv_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_csv = path.extension().and_then(|e| e.to_str()) == Some(CSV_EXTENSION);
            if is_csv && path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Load records from every CSV file in `dir`.
    ///
    /// Files that cannot be read are logged and skipped, as are files whose
    /// header has no month column. Only a failure to list the directory
    /// itself is returned as an error.
    pub fn load(&self, dir: &Path, progress: Option<&ProgressReporter>) -> Result<LoadSummary> {
        let files = self.discover_csv_files(dir)?;

        let mut summary = LoadSummary {
            files_found: files.len(),
            ..LoadSummary::default()
        };

        if files.is_empty() {
            warn!("No .csv files found in '{}'", dir.display());
            return Ok(summary);
        }

        info!("Processing {} files from {}", files.len(), dir.display());
        if let Some(p) = progress {
            p.set_length(files.len() as u64);
        }

        for path in &files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            if let Some(p) = progress {
                p.set_message(&format!("Reading {}", name));
            }

            match self.reader.read_temperatures(path) {
                Ok(FileContents::Records(records)) => {
                    debug!("Read {} records from {}", records.len(), name);
                    summary.files_read += 1;
                    summary.records.extend(records);
                }
                Ok(FileContents::NoMonthColumns) => {
                    debug!("Skipping {}: no month columns in header", name);
                    summary.files_skipped += 1;
                }
                Err(e) => {
                    warn!("Error processing file {}: {}", name, e);
                    summary.files_failed += 1;
                }
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        info!(
            "Loaded {} records from {} of {} files",
            summary.records.len(),
            summary.files_read,
            summary.files_found
        );

        Ok(summary)
    }
}

impl Default for DirectoryReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_discover_csv_files_sorted() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "b.csv", "");
        write(dir.path(), "a.csv", "");
        write(dir.path(), "notes.txt", "");
        write(dir.path(), "upper.CSV", "");
        fs::create_dir(dir.path().join("nested.csv"))?;

        let files = DirectoryReader::new().discover_csv_files(dir.path())?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.csv", "b.csv"]);
        Ok(())
    }

    #[test]
    fn test_empty_directory() -> Result<()> {
        let dir = TempDir::new()?;
        let summary = DirectoryReader::new().load(dir.path(), None)?;

        assert!(summary.is_empty());
        assert_eq!(summary.files_found, 0);
        Ok(())
    }

    #[test]
    fn test_files_load_in_name_order() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "2.csv", "STATION_NAME,March\nSecond,2.0\n");
        write(dir.path(), "1.csv", "STATION_NAME,March\nFirst,1.0\n");

        let summary = DirectoryReader::new().load(dir.path(), None)?;
        let stations: Vec<_> = summary.records.iter().map(|r| r.station.as_str()).collect();

        assert_eq!(stations, vec!["First", "Second"]);
        assert_eq!(summary.files_read, 2);
        Ok(())
    }

    #[test]
    fn test_file_without_months_is_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "a.csv", "STATION_NAME,Total\nA,100\n");
        write(dir.path(), "b.csv", "STATION_NAME,April\nB,18.5\n");

        let summary = DirectoryReader::new().load(dir.path(), None)?;

        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.files_read, 1);
        assert_eq!(
            summary.records,
            vec![TemperatureRecord::new("B", Month::April, 18.5)]
        );
        Ok(())
    }

    #[test]
    fn test_unreadable_file_does_not_stop_loading() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("a.csv"), b"STATION_NAME,May\n\xff,1.0\n")?;
        write(dir.path(), "b.csv", "STATION_NAME,May\nB,11.0\n");

        let summary = DirectoryReader::new().load(dir.path(), None)?;

        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.records.len(), 1);
        assert_eq!(summary.records[0].station, "B");
        Ok(())
    }

    #[test]
    fn test_loading_is_idempotent() -> Result<()> {
        let dir = TempDir::new()?;
        write(dir.path(), "x.csv", "STATION_NAME,June,July\nP,1,2\nQ,3,4\n");
        write(dir.path(), "y.csv", "July,STATION_NAME\n5,R\n");

        let reader = DirectoryReader::new();
        let first = reader.load(dir.path(), None)?;
        let second = reader.load(dir.path(), None)?;

        assert_eq!(first, second);
        assert_eq!(first.records.len(), 5);
        Ok(())
    }
}
