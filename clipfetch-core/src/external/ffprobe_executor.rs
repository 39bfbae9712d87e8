//! FFprobe integration for reading the container duration of a media file.
//!
//! ffprobe is asked for the single `format=duration` entry with keys and
//! section wrappers suppressed, so a healthy run prints one bare number.
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::DurationProbe;

use std::path::Path;
use std::process::{Command, Stdio};

/// Process-backed [`DurationProbe`] that shells out to ffprobe.
#[derive(Debug, Clone)]
pub struct FfprobeExecutor {
    program: String,
}

impl FfprobeExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.probe_program.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds the ffprobe argument list for `path`.
    pub fn build_args(&self, path: &Path) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-show_entries".to_string(),
            "format=duration".to_string(),
            "-of".to_string(),
            "default=noprint_wrappers=1:nokey=1".to_string(),
            path.to_string_lossy().into_owned(),
        ]
    }
}

impl Default for FfprobeExecutor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PROBE_PROGRAM)
    }
}

impl DurationProbe for FfprobeExecutor {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        let args = self.build_args(path);
        log::debug!("Running {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                log::error!("Failed to start probe '{}': {}", self.program, e);
                command_start_error(&self.program, e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::error!(
                "Probe failed for {} with {}: {}",
                path.display(),
                output.status,
                stderr.trim()
            );
            return Err(command_failed_error(&self.program, output.status, stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_duration(&stdout)
    }
}

/// Parses the bare duration printed by ffprobe.
///
/// Exactly one non-empty line holding a finite, non-negative number is
/// accepted. Anything else, including ffprobe's `N/A` placeholder, is
/// reported as [`CoreError::MalformedDuration`].
pub fn parse_duration(raw: &str) -> CoreResult<f64> {
    let malformed = || CoreError::MalformedDuration(raw.to_string());

    let mut lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());
    let value = lines.next().ok_or_else(malformed)?;
    if lines.next().is_some() {
        log::warn!("Probe returned more than one duration: {raw:?}");
        return Err(malformed());
    }

    let duration = value.parse::<f64>().map_err(|_| malformed())?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(malformed());
    }
    Ok(duration)
}
