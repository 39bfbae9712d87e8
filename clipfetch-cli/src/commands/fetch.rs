//! Implementation of the default fetch-then-probe run.
//!
//! Builds the core configuration from the parsed arguments, optionally checks
//! that both external tools are installed, runs the pipeline and prints a
//! short summary.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::logging::get_timestamp;

use clipfetch_core::{FetchReport, check_dependencies, format_bytes, format_duration};

use std::time::Instant;

use log::{debug, info};

/// Runs the download and duration probe described by `cli`.
pub fn run_fetch(cli: &Cli) -> CliResult<FetchReport> {
    let start_time = Instant::now();
    let config = cli.to_core_config();
    config.validate()?;
    debug!("Resolved configuration: {config:?}");

    if cli.skip_dependency_check {
        debug!("Skipping dependency check");
    } else {
        check_dependencies(&config).cli_context("Dependency check failed")?;
        info!("External dependency check passed.");
    }

    info!("Run started: {}", get_timestamp());
    let report = clipfetch_core::run_default_pipeline(&config)?;

    print_summary(&report, start_time.elapsed().as_secs_f64());
    Ok(report)
}

fn print_summary(report: &FetchReport, elapsed_secs: f64) {
    println!("----------------------------------------");
    println!("  Output file:  {}", report.output_path.display());
    println!("  File size:    {}", format_bytes(report.file_size));
    println!("  Duration:     {}", format_duration(report.duration_secs));
    println!("  Elapsed time: {}", format_duration(elapsed_secs));
    println!("  Finished:     {}", get_timestamp());
    println!("----------------------------------------");
}
