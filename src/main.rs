use clap::Parser;
use weather_stats::cli::{init_logging, run, Cli};
use weather_stats::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    run(cli)?;
    Ok(())
}
