// ============================================================================
// clipfetch-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with yt-dlp and ffprobe
//
// clipfetch depends on two capabilities it does not implement itself:
// fetching remote media to a local path, and reading the duration of a local
// media file. Each is a one-method trait here, backed in production by a
// process adapter (YtDlpFetcher, FfprobeExecutor) and in tests by the mocks.
//
// KEY COMPONENTS:
// - MediaFetcher / DurationProbe traits
// - Process-backed implementations in ytdlp_executor / ffprobe_executor
// - Dependency checking for the configured executables

use crate::config::CoreConfig;
use crate::error::{CoreResult, command_start_error};

use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Runs ffprobe to read the container duration
pub mod ffprobe_executor;

/// Runs yt-dlp to fetch a video to a local path
pub mod ytdlp_executor;

/// Test doubles for the two traits
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use ffprobe_executor::{FfprobeExecutor, parse_duration};
pub use ytdlp_executor::YtDlpFetcher;

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Fetches remote media into a local file.
///
/// Implementations only report whether the fetch itself failed; checking
/// that a usable file actually landed at `dest` is the pipeline's job.
pub trait MediaFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> CoreResult<()>;
}

/// Reads the container-level duration of a local media file, in seconds.
pub trait DurationProbe {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64>;
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that `program` can be spawned.
///
/// Runs `program version_arg` with output discarded. Only a failure to start
/// counts; the exit status is ignored because some tools exit non-zero for
/// version queries.
pub fn check_dependency(program: &str, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(program)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {program}");
            Ok(())
        }
        Err(e) => {
            log::warn!("Dependency check for '{program}' failed: {e}");
            Err(command_start_error(program, e))
        }
    }
}

/// Checks both configured executables.
pub fn check_dependencies(config: &CoreConfig) -> CoreResult<()> {
    check_dependency(&config.downloader_program, "--version")?;
    check_dependency(&config.probe_program, "-version")?;
    Ok(())
}
