use crate::analyzers::{RangeAnalyzer, SeasonalAnalyzer, StabilityAnalyzer};
use crate::cli::args::Cli;
use crate::config::AnalysisConfig;
use crate::error::{ProcessingError, Result};
use crate::readers::{DirectoryReader, LoadSummary, TemperatureReader};
use crate::utils::constants::DEFAULT_DATA_DIR;
use crate::utils::progress::ProgressReporter;
use crate::writers::{Report, ReportWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// What happened to one report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportStatus {
    Written(PathBuf),
    /// Not enough data to produce the report; no file was written.
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub file_name: String,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub data_dir: PathBuf,
    pub files_found: usize,
    pub files_read: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub record_count: usize,
    pub reports: Vec<ReportOutcome>,
}

impl RunSummary {
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.reports.iter().filter_map(|r| match &r.status {
            ReportStatus::Written(path) => Some(path.as_path()),
            _ => None,
        })
    }
}

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = cli.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weather_stats={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// The `temperatures` folder next to the running executable.
pub fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DATA_DIR)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Load the data directory and write all three reports.
///
/// Fails only when the configuration is invalid, the data directory is
/// missing, or no valid record could be loaded. Individual report failures
/// are recorded in the returned summary.
pub fn run(cli: Cli) -> Result<RunSummary> {
    let config = AnalysisConfig::load(cli.config.as_deref())?
        .with_overrides(cli.output_dir.clone(), cli.tolerance)?;

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    if !data_dir.is_dir() {
        error!(
            "The folder '{}' does not exist. Provide a path or create a '{}' folder next to the program.",
            data_dir.display(),
            DEFAULT_DATA_DIR
        );
        return Err(ProcessingError::MissingDirectory(data_dir));
    }

    let progress = if cli.quiet {
        ProgressReporter::silent()
    } else {
        ProgressReporter::new(0, "Reading temperature files...", false)
    };

    let loader = DirectoryReader::with_reader(TemperatureReader::with_default_station(
        config.default_station.clone(),
    ));
    let load = loader.load(&data_dir, Some(&progress))?;
    progress.finish_and_clear();

    if load.is_empty() {
        error!("No valid temperature data found. Exiting.");
        return Err(ProcessingError::NoData(data_dir));
    }

    debug!("{}", load.summary());

    let reports = write_reports(&load, &config, &progress);

    progress.println("\nAnalysis Complete.");

    Ok(RunSummary {
        data_dir,
        files_found: load.files_found,
        files_read: load.files_read,
        files_skipped: load.files_skipped,
        files_failed: load.files_failed,
        record_count: load.records.len(),
        reports,
    })
}

/// Run each analyzer over the loaded records. A failure in one report never
/// prevents the others.
fn write_reports(
    load: &LoadSummary,
    config: &AnalysisConfig,
    progress: &ProgressReporter,
) -> Vec<ReportOutcome> {
    let writer = ReportWriter::new(&config.output_dir);
    let records = &load.records;

    let seasonal = SeasonalAnalyzer::new().analyze(records);
    let range = RangeAnalyzer::with_tolerance(config.tie_tolerance).analyze(records);
    let stability = StabilityAnalyzer::with_tolerance(config.tie_tolerance).analyze(records);

    let mut outcomes = vec![
        write_one(&writer, &config.seasonal_report, &seasonal, progress),
        write_one(&writer, &config.range_report, &range, progress),
    ];

    outcomes.push(match stability {
        Ok(report) => {
            if report.excluded > 0 {
                info!(
                    "{} station(s) with a single reading excluded from stability analysis",
                    report.excluded
                );
            }
            write_one(&writer, &config.stability_report, &report, progress)
        }
        Err(e) => {
            warn!("{}", e);
            ReportOutcome {
                file_name: config.stability_report.clone(),
                status: ReportStatus::Skipped(e.to_string()),
            }
        }
    });

    outcomes
}

fn write_one<R: Report>(
    writer: &ReportWriter,
    file_name: &str,
    report: &R,
    progress: &ProgressReporter,
) -> ReportOutcome {
    let status = match writer.write_report(file_name, report) {
        Ok(path) => {
            progress.println(&format!("Generated: {}", path.display()));
            ReportStatus::Written(path)
        }
        Err(e) => {
            error!("{}", e);
            ReportStatus::Failed(e.to_string())
        }
    };

    ReportOutcome {
        file_name: file_name.to_string(),
        status,
    }
}
