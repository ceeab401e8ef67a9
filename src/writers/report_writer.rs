use crate::error::{ProcessingError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A plain-text report: one line per entry.
pub trait Report {
    fn lines(&self) -> Vec<String>;
}

pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write a report to `file_name` under the output directory, one
    /// newline-terminated line per entry. An empty report yields an empty
    /// file.
    pub fn write_report<R: Report + ?Sized>(&self, file_name: &str, report: &R) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);

        self.write_lines(&path, &report.lines())
            .map_err(|source| ProcessingError::ReportWrite {
                path: path.clone(),
                source,
            })?;

        debug!("Wrote {}", path.display());
        Ok(path)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> std::io::Result<()> {
        if !self.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.output_dir)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(".")
    }
}
