use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "weather-stats")]
#[command(about = "Seasonal, range and stability statistics for weather station temperature tables")]
#[command(version)]
pub struct Cli {
    /// Folder containing the temperature CSV files [default: "temperatures" next to the executable]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, help = "Directory to write the reports to [default: current directory]")]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, help = "Configuration file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Tolerance under which two ranges or deviations count as tied")]
    pub tolerance: Option<f64>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, conflicts_with = "verbose", help = "Only log warnings and hide progress")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
