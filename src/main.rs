use clap::Parser;
use std::path::{Path, PathBuf};

mod check;
mod log;
mod logging;
mod model;
mod render;
mod report;
mod stats;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "metal-hud-report", version)]
#[command(about = "Process metal-HUD data into CSV format.", long_about = None)]
struct Cli {
    /// Input file containing metal-HUD data
    input_filename: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    // Outputs land in the working directory, named after the input.
    report::process_file(&cli.input_filename, Path::new(""))?;

    Ok(())
}
