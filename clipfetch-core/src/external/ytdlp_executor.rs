//! yt-dlp integration for fetching a single video to a fixed path.
//!
//! The downloader runs with inherited stdio so its own progress output reaches
//! the terminal. Only the exit status is inspected here.

use crate::config::CoreConfig;
use crate::error::{CoreResult, command_failed_error, command_start_error};
use crate::external::MediaFetcher;
use crate::utils::format_command_line;

use std::path::Path;
use std::process::Command;

/// Process-backed [`MediaFetcher`] that shells out to yt-dlp.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    program: String,
    format_selector: String,
    merge_output_format: String,
    cookies_from_browser: Option<String>,
}

impl YtDlpFetcher {
    /// Creates a fetcher for `program` using the default format settings and no cookies.
    pub fn new(program: impl Into<String>) -> Self {
        let defaults = CoreConfig::default();
        Self {
            program: program.into(),
            format_selector: defaults.format_selector,
            merge_output_format: defaults.merge_output_format,
            cookies_from_browser: None,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            program: config.downloader_program.clone(),
            format_selector: config.format_selector.clone(),
            merge_output_format: config.merge_output_format.clone(),
            cookies_from_browser: config.cookies_from_browser.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Builds the downloader argument list for `url` written to `dest`.
    pub fn build_args(&self, url: &str, dest: &Path) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            self.format_selector.clone(),
            "--merge-output-format".to_string(),
            self.merge_output_format.clone(),
        ];

        if let Some(browser) = &self.cookies_from_browser {
            args.push("--cookies-from-browser".to_string());
            args.push(browser.clone());
        }

        // yt-dlp skips files that already exist unless told otherwise
        args.push("--force-overwrites".to_string());

        args.push("-o".to_string());
        args.push(dest.to_string_lossy().into_owned());
        args.push(url.to_string());
        args
    }
}

impl MediaFetcher for YtDlpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> CoreResult<()> {
        let args = self.build_args(url, dest);
        println!("Running: {}", format_command_line(&self.program, &args));
        log::debug!("Spawning downloader '{}' with {} args", self.program, args.len());

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| {
                log::error!("Failed to start downloader '{}': {}", self.program, e);
                command_start_error(&self.program, e)
            })?;

        if !status.success() {
            log::error!("Downloader '{}' failed with {}", self.program, status);
            // stderr went straight to the terminal, nothing captured
            return Err(command_failed_error(&self.program, status, ""));
        }

        log::info!("Downloader finished for {}", url);
        Ok(())
    }
}
