//! Run configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, an optional
//! configuration file, `WEATHER_STATS_*` environment variables, and finally
//! command-line flags applied with [`AnalysisConfig::with_overrides`].

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_STATION_NAME, ENV_PREFIX, RANGE_REPORT_FILE, SEASONAL_REPORT_FILE,
    STABILITY_REPORT_FILE, TIE_TOLERANCE,
};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct AnalysisConfig {
    /// Directory the reports are written to.
    pub output_dir: PathBuf,

    /// Absolute difference under which two ranges or deviations tie.
    #[validate(range(min = 0.0, max = 1.0))]
    pub tie_tolerance: f64,

    /// Station name for rows without one.
    #[validate(length(min = 1))]
    pub default_station: String,

    #[validate(length(min = 1))]
    pub seasonal_report: String,

    #[validate(length(min = 1))]
    pub range_report: String,

    #[validate(length(min = 1))]
    pub stability_report: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            tie_tolerance: TIE_TOLERANCE,
            default_station: DEFAULT_STATION_NAME.to_string(),
            seasonal_report: SEASONAL_REPORT_FILE.to_string(),
            range_report: RANGE_REPORT_FILE.to_string(),
            stability_report: STABILITY_REPORT_FILE.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from defaults, an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("output_dir", defaults.output_dir.to_string_lossy().into_owned())?
            .set_default("tie_tolerance", defaults.tie_tolerance)?
            .set_default("default_station", defaults.default_station)?
            .set_default("seasonal_report", defaults.seasonal_report)?
            .set_default("range_report", defaults.range_report)?
            .set_default("stability_report", defaults.stability_report)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        mut self,
        output_dir: Option<PathBuf>,
        tie_tolerance: Option<f64>,
    ) -> Result<Self> {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(tolerance) = tie_tolerance {
            self.tie_tolerance = tolerance;
        }

        self.validate()?;
        Ok(self)
    }
}
