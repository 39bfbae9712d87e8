//! Configuration structures and constants for the clipfetch-core library.
//!
//! The fetch and probe steps read everything they need from a [`CoreConfig`],
//! which is built once at startup and never mutated during a run.

mod builder;

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Video fetched when no URL is supplied.
pub const DEFAULT_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Directory the downloaded video is written into.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// File name of the downloaded video inside the output directory.
pub const DEFAULT_OUTPUT_FILENAME: &str = "input.mp4";

/// yt-dlp format selector: best video plus best audio, falling back to the
/// best single file that carries both.
pub const DEFAULT_FORMAT_SELECTOR: &str = "bv*+ba/b";

/// Container the separate streams are merged into.
pub const DEFAULT_MERGE_OUTPUT_FORMAT: &str = "mp4";

/// Browser whose cookie store yt-dlp reads for authentication.
pub const DEFAULT_COOKIES_BROWSER: &str = "chrome";

/// Downloader executable.
pub const DEFAULT_DOWNLOADER_PROGRAM: &str = "yt-dlp";

/// Media probe executable.
pub const DEFAULT_PROBE_PROGRAM: &str = "ffprobe";

/// Main configuration structure for the clipfetch-core library.
///
/// Every field has a default matching the stock behaviour (fetch the default
/// URL into `outputs/input.mp4` using Chrome's cookies), so callers only set
/// what they want to change.
///
/// # Examples
///
/// ```rust
/// use clipfetch_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .url("https://www.youtube.com/watch?v=abc123")
///     .output_dir("downloads")
///     .no_cookies()
///     .build();
///
/// assert_eq!(config.output_path(), std::path::PathBuf::from("downloads/input.mp4"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Source video URL
    pub url: String,

    /// Directory where the downloaded file is written
    pub output_dir: PathBuf,

    /// Name of the downloaded file inside `output_dir`
    pub output_filename: String,

    /// Format selector passed to the downloader (`-f`)
    pub format_selector: String,

    /// Container format for merged output (`--merge-output-format`)
    pub merge_output_format: String,

    /// Browser cookie store to authenticate with, `None` to download anonymously
    pub cookies_from_browser: Option<String>,

    /// Downloader executable name or path
    pub downloader_program: String,

    /// Probe executable name or path
    pub probe_program: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            format_selector: DEFAULT_FORMAT_SELECTOR.to_string(),
            merge_output_format: DEFAULT_MERGE_OUTPUT_FORMAT.to_string(),
            cookies_from_browser: Some(DEFAULT_COOKIES_BROWSER.to_string()),
            downloader_program: DEFAULT_DOWNLOADER_PROGRAM.to_string(),
            probe_program: DEFAULT_PROBE_PROGRAM.to_string(),
        }
    }
}

impl CoreConfig {
    /// Full path of the downloaded video.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_filename)
    }

    /// Checks that the configuration can produce a meaningful run.
    pub fn validate(&self) -> CoreResult<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(CoreError::Config("URL must not be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "URL must use http or https: {}",
                self.url
            )));
        }

        if self.output_filename.trim().is_empty() {
            return Err(CoreError::Config(
                "Output filename must not be empty".to_string(),
            ));
        }
        // Only a bare file name is accepted; the directory comes from output_dir.
        if Path::new(&self.output_filename).file_name()
            != Some(std::ffi::OsStr::new(&self.output_filename))
        {
            return Err(CoreError::Config(format!(
                "Output filename must be a plain file name: {}",
                self.output_filename
            )));
        }

        require_non_empty(&self.format_selector, "Format selector")?;
        require_non_empty(&self.merge_output_format, "Merge output format")?;
        require_non_empty(&self.downloader_program, "Downloader program")?;
        require_non_empty(&self.probe_program, "Probe program")?;

        if let Some(browser) = &self.cookies_from_browser {
            require_non_empty(browser, "Cookie browser name")?;
        }

        Ok(())
    }
}

fn require_non_empty(value: &str, what: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        Err(CoreError::Config(format!("{what} must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path() {
        let config = CoreConfig::default();
        assert_eq!(config.output_path(), PathBuf::from("outputs").join("input.mp4"));
        assert_eq!(config.cookies_from_browser.as_deref(), Some("chrome"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        let config = CoreConfig {
            url: "ftp://example.com/video".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_empty_url() {
        let config = CoreConfig {
            url: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_filename_with_directory() {
        let config = CoreConfig {
            output_filename: "nested/input.mp4".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let config = CoreConfig {
            output_filename: "..".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_blank_browser_but_allows_none() {
        let blank = CoreConfig {
            cookies_from_browser: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let anonymous = CoreConfig {
            cookies_from_browser: None,
            ..Default::default()
        };
        assert!(anonymous.validate().is_ok());
    }

    #[test]
    fn rejects_empty_program_names() {
        let config = CoreConfig {
            probe_program: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Probe program"));
    }
}
