// ============================================================================
// clipfetch-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every setter starts from the stock
// defaults, so a bare `CoreConfigBuilder::new().build()` equals
// `CoreConfig::default()`. Validation is left to `CoreConfig::validate`.

use std::path::PathBuf;

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use clipfetch_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .output_filename("clip.mkv")
///     .merge_output_format("mkv")
///     .cookies_from_browser("firefox")
///     .build();
///
/// assert_eq!(config.merge_output_format, "mkv");
/// assert_eq!(config.cookies_from_browser.as_deref(), Some("firefox"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Sets the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Sets the output file name.
    pub fn output_filename(mut self, name: impl Into<String>) -> Self {
        self.config.output_filename = name.into();
        self
    }

    /// Sets the downloader format selector.
    pub fn format_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.format_selector = selector.into();
        self
    }

    /// Sets the container used when merging streams.
    pub fn merge_output_format(mut self, format: impl Into<String>) -> Self {
        self.config.merge_output_format = format.into();
        self
    }

    /// Authenticates with cookies from the named browser.
    pub fn cookies_from_browser(mut self, browser: impl Into<String>) -> Self {
        self.config.cookies_from_browser = Some(browser.into());
        self
    }

    /// Downloads without browser cookies.
    pub fn no_cookies(mut self) -> Self {
        self.config.cookies_from_browser = None;
        self
    }

    /// Sets the downloader executable.
    pub fn downloader_program(mut self, program: impl Into<String>) -> Self {
        self.config.downloader_program = program.into();
        self
    }

    /// Sets the probe executable.
    pub fn probe_program(mut self, program: impl Into<String>) -> Self {
        self.config.probe_program = program.into();
        self
    }

    /// Builds the CoreConfig.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
