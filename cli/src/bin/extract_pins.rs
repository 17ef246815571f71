use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cli::CliError;
use color_eyre::eyre::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Split a transparent sprite sheet of pushpins into individual images
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source image containing the pins
    input_png: PathBuf,
    /// Directory receiving pin_NN.png files and extraction_metadata.json
    output_dir: PathBuf,
}

/// Exit status for a rejected command line: 0 for help/version output, 1 for usage errors.
fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(ExitCode::from(parse_exit_code(&err)));
        }
    };

    match cli::run(&args.input_png, &args.output_dir) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(CliError::NoPins) => {
            error!("No pins extracted!");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
