pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{default_data_dir, init_logging, run, ReportOutcome, ReportStatus, RunSummary};
