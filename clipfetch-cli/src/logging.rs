// ============================================================================
// clipfetch-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Logger Setup and Timestamps
//
// The application logs through the standard `log` macros with `env_logger`
// as the backend. Log lines go to stderr so stdout carries only the run
// output (command line, download path, duration).
//
// USAGE:
// - default: info
// - --verbose: debug
// - RUST_LOG=...: overrides both

use env_logger::Env;

/// Initializes env_logger. `RUST_LOG` wins over the `verbose` flag.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    // try_init: integration tests may initialize more than once in-process
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_target(false)
        .try_init();

    log::debug!("Logger initialized with default level: {}", level);
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
