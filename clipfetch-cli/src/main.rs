// clipfetch-cli/src/main.rs
//
// Entry point for the clipfetch binary: parses arguments, sets up logging,
// runs the fetch-then-probe pipeline and maps failures to exit code 1.

use clap::Parser;
use clipfetch_cli::{Cli, logging, run_fetch};
use owo_colors::OwoColorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run_fetch(&cli) {
        log::debug!("Run failed: {e:?}");
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
