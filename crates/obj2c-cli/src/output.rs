//! Output formatting utilities for the CLI.

use std::path::Path;

use serde::Serialize;

use crate::OutputFormat;

/// Serializable view of a finished conversion.
#[derive(Debug, Serialize)]
pub struct ConversionReport<'a> {
    pub output: &'a Path,
    pub positions: usize,
    pub texcoords: usize,
    pub faces: usize,
    pub unified_vertices: usize,
}

impl<'a> ConversionReport<'a> {
    pub fn new(summary: &obj2c::ConvertSummary, output: &'a Path) -> Self {
        Self {
            output,
            positions: summary.positions,
            texcoords: summary.texcoords,
            faces: summary.faces,
            unified_vertices: summary.unified_vertices,
        }
    }
}

/// Print the conversion report in the selected format.
pub fn report(report: &ConversionReport<'_>, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }

    match format {
        OutputFormat::Text => {
            println!(
                "{} positions, {} texcoords, {} faces -> {} unified vertices",
                report.positions, report.texcoords, report.faces, report.unified_vertices
            );
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(report) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message.
pub fn success(msg: &str, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }

    match format {
        OutputFormat::Text => {
            use colored::Colorize;
            println!("{} {}", "✓".green().bold(), msg);
        }
        OutputFormat::Json => {
            // The JSON report already carries the outcome.
        }
    }
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    use colored::Colorize;
    eprintln!("{} {}", "✗".red().bold(), msg);
}
