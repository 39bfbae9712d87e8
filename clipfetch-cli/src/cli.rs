// clipfetch-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.
//
// Every option has a default, so a bare `clipfetch` runs the stock
// configuration: fetch the default URL into outputs/input.mp4 and print its
// duration.

use clap::Parser;
use clipfetch_core::config::{
    DEFAULT_COOKIES_BROWSER, DEFAULT_DOWNLOADER_PROGRAM, DEFAULT_FORMAT_SELECTOR,
    DEFAULT_MERGE_OUTPUT_FORMAT, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILENAME, DEFAULT_PROBE_PROGRAM,
    DEFAULT_URL,
};
use clipfetch_core::{CoreConfig, CoreConfigBuilder};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "clipfetch: download one video and report its duration",
    long_about = "Downloads a single video with yt-dlp and prints its duration as reported by ffprobe."
)]
pub struct Cli {
    /// Video URL to download
    #[arg(long, value_name = "URL", env = "CLIPFETCH_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Directory the video is written into
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        env = "CLIPFETCH_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// File name of the downloaded video
    #[arg(long, value_name = "NAME", default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output_filename: String,

    /// yt-dlp format selector
    #[arg(long = "format", value_name = "SELECTOR", default_value = DEFAULT_FORMAT_SELECTOR)]
    pub format_selector: String,

    /// Container to merge audio and video into
    #[arg(long = "merge-format", value_name = "EXT", default_value = DEFAULT_MERGE_OUTPUT_FORMAT)]
    pub merge_output_format: String,

    /// Browser whose cookies are used for authentication
    #[arg(
        long,
        value_name = "BROWSER",
        env = "CLIPFETCH_COOKIES_BROWSER",
        default_value = DEFAULT_COOKIES_BROWSER
    )]
    pub cookies_from_browser: String,

    /// Download without browser cookies (wins over --cookies-from-browser)
    #[arg(long, default_value_t = false)]
    pub no_cookies: bool,

    /// Downloader executable
    #[arg(
        long = "downloader",
        value_name = "PROGRAM",
        env = "CLIPFETCH_DOWNLOADER",
        default_value = DEFAULT_DOWNLOADER_PROGRAM
    )]
    pub downloader_program: String,

    /// Probe executable
    #[arg(
        long = "probe",
        value_name = "PROGRAM",
        env = "CLIPFETCH_PROBE",
        default_value = DEFAULT_PROBE_PROGRAM
    )]
    pub probe_program: String,

    /// Do not check that the downloader and probe are installed before running
    #[arg(long, default_value_t = false)]
    pub skip_dependency_check: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Converts the parsed arguments into a core configuration.
    pub fn to_core_config(&self) -> CoreConfig {
        let builder = CoreConfigBuilder::new()
            .url(&self.url)
            .output_dir(&self.output_dir)
            .output_filename(&self.output_filename)
            .format_selector(&self.format_selector)
            .merge_output_format(&self.merge_output_format)
            .downloader_program(&self.downloader_program)
            .probe_program(&self.probe_program);

        if self.no_cookies {
            builder.no_cookies().build()
        } else {
            builder.cookies_from_browser(&self.cookies_from_browser).build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_stock_config() {
        let cli = Cli::try_parse_from(["clipfetch"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.skip_dependency_check);
        assert_eq!(cli.to_core_config(), CoreConfig::default());
    }

    #[test]
    fn overrides_flow_into_config() {
        let cli = Cli::try_parse_from([
            "clipfetch",
            "--url",
            "https://www.youtube.com/watch?v=abc",
            "-o",
            "downloads",
            "--output-filename",
            "clip.mkv",
            "--merge-format",
            "mkv",
            "--format",
            "b",
            "--cookies-from-browser",
            "firefox",
            "--downloader",
            "/usr/local/bin/yt-dlp",
            "--probe",
            "/usr/local/bin/ffprobe",
            "-v",
        ])
        .unwrap();

        let config = cli.to_core_config();
        assert!(cli.verbose);
        assert_eq!(config.url, "https://www.youtube.com/watch?v=abc");
        assert_eq!(config.output_path(), PathBuf::from("downloads").join("clip.mkv"));
        assert_eq!(config.merge_output_format, "mkv");
        assert_eq!(config.format_selector, "b");
        assert_eq!(config.cookies_from_browser.as_deref(), Some("firefox"));
        assert_eq!(config.downloader_program, "/usr/local/bin/yt-dlp");
        assert_eq!(config.probe_program, "/usr/local/bin/ffprobe");
    }

    #[test]
    fn no_cookies_clears_browser() {
        let cli = Cli::try_parse_from(["clipfetch", "--no-cookies"]).unwrap();
        assert!(cli.to_core_config().cookies_from_browser.is_none());
    }

    #[test]
    fn no_cookies_wins_over_explicit_browser() {
        let cli =
            Cli::try_parse_from(["clipfetch", "--no-cookies", "--cookies-from-browser", "firefox"])
                .unwrap();
        assert!(cli.no_cookies);
        assert!(cli.to_core_config().cookies_from_browser.is_none());
    }
}
