// ============================================================================
// clipfetch-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Fetch and Probe Steps
//
// Every failure in clipfetch is terminal for the run, so there is a single
// error enum shared by the library and the CLI. Constructor helpers keep the
// wording of process failures consistent between the two adapters.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by clipfetch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Required external tool '{0}' was not found on PATH")]
    DependencyNotFound(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("'{0}' exited with {1}{}", format_stderr(.2))]
    CommandFailed(String, ExitStatus, String),

    #[error("Video download failed: no usable output file at {}", .0.display())]
    DownloadFailed(PathBuf),

    #[error("Malformed duration output from probe: {0:?}")]
    MalformedDuration(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result alias used throughout clipfetch.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Builds the error for a process that could not be spawned.
///
/// A missing binary is reported as [`CoreError::DependencyNotFound`] so the
/// user sees which tool to install rather than a raw OS error.
pub fn command_start_error(program: impl Into<String>, err: io::Error) -> CoreError {
    let program = program.into();
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(program)
    } else {
        CoreError::CommandStart(program, err)
    }
}

/// Builds the error for a process that ran but exited unsuccessfully.
pub fn command_failed_error(
    program: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(program.into(), status, stderr.into())
}
