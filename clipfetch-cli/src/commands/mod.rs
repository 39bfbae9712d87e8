//! Command implementations for the CLI.

/// Downloads the configured video and prints its duration.
pub mod fetch;
