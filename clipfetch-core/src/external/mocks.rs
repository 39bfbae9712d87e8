// clipfetch-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::{DurationProbe, MediaFetcher, parse_duration};
use crate::error::{CoreError, CoreResult, command_failed_error};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    // Raw wait status: the exit code lives in the high byte
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// What the mock downloader does when `fetch` is called.
#[derive(Debug, Clone)]
pub enum FetchBehavior {
    /// Exit successfully after writing these bytes to the destination.
    WriteFile(Vec<u8>),
    /// Exit successfully without producing a file.
    NoOutput,
    /// Exit with the given non-zero code.
    Fail(i32),
    /// Fail to start, as if the executable were missing.
    SpawnError,
}

/// Mock implementation of MediaFetcher.
#[derive(Clone)]
pub struct MockMediaFetcher {
    behavior: FetchBehavior,
    received_calls: Rc<RefCell<Vec<(String, PathBuf)>>>,
}

impl MockMediaFetcher {
    pub fn new(behavior: FetchBehavior) -> Self {
        Self {
            behavior,
            received_calls: Rc::default(),
        }
    }

    /// Succeeds and writes a small placeholder file.
    pub fn writing_file() -> Self {
        Self::new(FetchBehavior::WriteFile(b"mock video data".to_vec()))
    }

    pub fn get_received_calls(&self) -> Vec<(String, PathBuf)> {
        self.received_calls.borrow().clone()
    }
}

impl MediaFetcher for MockMediaFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> CoreResult<()> {
        self.received_calls
            .borrow_mut()
            .push((url.to_string(), dest.to_path_buf()));

        match &self.behavior {
            FetchBehavior::WriteFile(bytes) => {
                std::fs::write(dest, bytes)?;
                log::info!("MockMediaFetcher wrote {} bytes to {}", bytes.len(), dest.display());
                Ok(())
            }
            FetchBehavior::NoOutput => {
                log::info!("MockMediaFetcher exiting without output");
                Ok(())
            }
            FetchBehavior::Fail(code) => {
                Err(command_failed_error("mock-downloader", exit_status(*code), "mock failure"))
            }
            FetchBehavior::SpawnError => {
                Err(CoreError::DependencyNotFound("mock-downloader".to_string()))
            }
        }
    }
}

/// Mock implementation of DurationProbe.
///
/// Canned stdout is run through the real `parse_duration`, so parsing
/// behaviour is exercised exactly as with ffprobe.
#[derive(Clone)]
pub struct MockDurationProbe {
    result: Result<String, i32>,
    probed_paths: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockDurationProbe {
    /// Probe that prints `stdout` and exits successfully.
    pub fn with_output(stdout: impl Into<String>) -> Self {
        Self {
            result: Ok(stdout.into()),
            probed_paths: Rc::default(),
        }
    }

    /// Probe that exits with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            result: Err(code),
            probed_paths: Rc::default(),
        }
    }

    pub fn get_probed_paths(&self) -> Vec<PathBuf> {
        self.probed_paths.borrow().clone()
    }
}

impl DurationProbe for MockDurationProbe {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        self.probed_paths.borrow_mut().push(path.to_path_buf());

        if !path.exists() {
            // ffprobe exits 1 for a missing input
            return Err(command_failed_error(
                "mock-probe",
                exit_status(1),
                format!("{}: No such file or directory", path.display()),
            ));
        }

        match &self.result {
            Ok(stdout) => parse_duration(stdout),
            Err(code) => Err(command_failed_error("mock-probe", exit_status(*code), "mock failure")),
        }
    }
}
