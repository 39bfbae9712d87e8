//! Core library for fetching a single video with yt-dlp and reading its
//! duration with ffprobe.
//!
//! Both tools sit behind one-method traits ([`MediaFetcher`], [`DurationProbe`])
//! so the pipeline can run against test doubles without spawning processes.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clipfetch_core::{CoreConfig, check_dependencies, run_default_pipeline};
//!
//! let config = CoreConfig::default();
//! check_dependencies(&config).unwrap();
//!
//! let report = run_default_pipeline(&config).unwrap();
//! println!("{} is {:.2}s long", report.output_path.display(), report.duration_secs);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod pipeline;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{
    DurationProbe, FfprobeExecutor, MediaFetcher, YtDlpFetcher, check_dependencies,
    check_dependency, parse_duration,
};
pub use pipeline::{FetchReport, fetch_and_probe, run_default_pipeline};
pub use utils::{format_bytes, format_command_line, format_duration, format_seconds};
