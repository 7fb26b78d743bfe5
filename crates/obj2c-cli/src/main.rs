//! Command-line entry point for the OBJ to C array converter.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::output::ConversionReport;

const BLENDER_EXPORT_HELP: &str = "\
On export from Blender use these settings:
  - Include UV Coordinates: ON
  - Triangulate Mesh: ON
  - Everything else: OFF";

/// Format for the conversion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "obj2c",
    version,
    about = "Convert a triangulated OBJ mesh into C array literals",
    after_help = BLENDER_EXPORT_HELP
)]
struct Cli {
    /// Input OBJ file.
    input: PathBuf,

    /// Output C source file.
    output: PathBuf,

    /// Summary format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress all non-error output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the summary.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match obj2c::convert(&cli.input, &cli.output) {
        Ok(summary) => {
            let report = ConversionReport::new(&summary, &cli.output);
            output::report(&report, cli.format, cli.quiet);
            output::success(
                &format!("Exported successfully to {}", cli.output.display()),
                cli.format,
                cli.quiet,
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
