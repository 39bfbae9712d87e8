//! The fetch-then-probe run.
//!
//! The download step, including the check that a usable file exists, always
//! completes before the probe is invoked. Any failure ends the run; nothing
//! is retried and nothing written so far is cleaned up.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{DurationProbe, FfprobeExecutor, MediaFetcher, YtDlpFetcher};
use crate::utils::format_seconds;

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchReport {
    pub output_path: PathBuf,
    /// Size of the downloaded file in bytes
    pub file_size: u64,
    pub duration_secs: f64,
}

/// Downloads `config.url` with `fetcher`, then reads its duration with `probe`.
pub fn fetch_and_probe<F, P>(config: &CoreConfig, fetcher: &F, probe: &P) -> CoreResult<FetchReport>
where
    F: MediaFetcher + ?Sized,
    P: DurationProbe + ?Sized,
{
    config.validate()?;

    let output_path = config.output_path();
    ensure_output_dir(&config.output_dir)?;

    log::info!("Fetching {} to {}", config.url, output_path.display());
    fetcher.fetch(&config.url, &output_path)?;

    let file_size = verify_download(&output_path)?;
    println!("Downloaded video to {}", output_path.display());

    log::info!("Probing duration of {}", output_path.display());
    let duration_secs = probe.probe_duration(&output_path)?;
    println!("Video duration: {}", format_seconds(duration_secs));

    Ok(FetchReport {
        output_path,
        file_size,
        duration_secs,
    })
}

/// Runs the pipeline with the yt-dlp and ffprobe process adapters.
pub fn run_default_pipeline(config: &CoreConfig) -> CoreResult<FetchReport> {
    let fetcher = YtDlpFetcher::from_config(config);
    let probe = FfprobeExecutor::from_config(config);
    fetch_and_probe(config, &fetcher, &probe)
}

fn ensure_output_dir(dir: &Path) -> CoreResult<()> {
    // An empty path means the current directory
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })
}

/// Returns the size of the downloaded file, or `DownloadFailed` if there is
/// no non-empty regular file at `path`.
fn verify_download(path: &Path) -> CoreResult<u64> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(meta.len()),
        Ok(meta) => {
            log::error!(
                "Downloader left an unusable entry at {} (file: {}, {} bytes)",
                path.display(),
                meta.is_file(),
                meta.len()
            );
            Err(CoreError::DownloadFailed(path.to_path_buf()))
        }
        Err(e) => {
            log::error!("No downloaded file at {}: {}", path.display(), e);
            Err(CoreError::DownloadFailed(path.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfigBuilder;
    use crate::external::mocks::{FetchBehavior, MockDurationProbe, MockMediaFetcher};
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> CoreConfig {
        CoreConfigBuilder::new()
            .output_dir(dir.join("outputs"))
            .build()
    }

    #[test]
    fn successful_run_reports_duration_and_size() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        let fetcher = MockMediaFetcher::writing_file();
        let probe = MockDurationProbe::with_output("12.345600\n");

        let report = fetch_and_probe(&config, &fetcher, &probe).unwrap();

        assert_eq!(report.output_path, config.output_path());
        assert!(report.output_path.is_file());
        assert_eq!(report.file_size, b"mock video data".len() as u64);
        assert!((report.duration_secs - 12.3456).abs() < 1e-9);
        assert!(report.duration_secs.is_finite() && report.duration_secs > 0.0);
        assert_eq!(format_seconds(report.duration_secs), "12.35 seconds");

        assert_eq!(
            fetcher.get_received_calls(),
            vec![(config.url.clone(), config.output_path())]
        );
        assert_eq!(probe.get_probed_paths(), vec![config.output_path()]);
    }

    #[test]
    fn creates_missing_output_directory() {
        let tmp = tempdir().unwrap();
        let config = CoreConfigBuilder::new()
            .output_dir(tmp.path().join("a").join("b"))
            .build();
        let fetcher = MockMediaFetcher::writing_file();
        let probe = MockDurationProbe::with_output("1.0");

        fetch_and_probe(&config, &fetcher, &probe).unwrap();
        assert!(tmp.path().join("a").join("b").is_dir());
    }

    #[test]
    fn downloader_failure_skips_probe() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        let fetcher = MockMediaFetcher::new(FetchBehavior::Fail(1));
        let probe = MockDurationProbe::with_output("12.0");

        let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();

        assert!(matches!(err, CoreError::CommandFailed(..)));
        assert!(probe.get_probed_paths().is_empty());
    }

    #[test]
    fn missing_downloader_skips_probe() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        let fetcher = MockMediaFetcher::new(FetchBehavior::SpawnError);
        let probe = MockDurationProbe::with_output("12.0");

        let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();

        assert!(matches!(err, CoreError::DependencyNotFound(_)));
        assert!(probe.get_probed_paths().is_empty());
    }

    #[test]
    fn no_output_file_is_download_failure() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        let fetcher = MockMediaFetcher::new(FetchBehavior::NoOutput);
        let probe = MockDurationProbe::with_output("12.0");

        let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();

        match err {
            CoreError::DownloadFailed(path) => assert_eq!(path, config.output_path()),
            other => panic!("expected DownloadFailed, got {other:?}"),
        }
        assert!(probe.get_probed_paths().is_empty());
    }

    #[test]
    fn empty_output_file_is_download_failure() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        let fetcher = MockMediaFetcher::new(FetchBehavior::WriteFile(Vec::new()));
        let probe = MockDurationProbe::with_output("12.0");

        let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();
        assert!(matches!(err, CoreError::DownloadFailed(_)));
        assert!(err.to_string().starts_with("Video download failed"));
    }

    #[test]
    fn directory_at_output_path_is_download_failure() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        fs::create_dir_all(config.output_path()).unwrap();
        let fetcher = MockMediaFetcher::new(FetchBehavior::NoOutput);
        let probe = MockDurationProbe::with_output("12.0");

        let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();
        assert!(matches!(err, CoreError::DownloadFailed(_)));
    }

    #[test]
    fn malformed_probe_output_is_reported() {
        for raw in ["", "N/A", "not a number"] {
            let tmp = tempdir().unwrap();
            let config = config_in(tmp.path());
            let fetcher = MockMediaFetcher::writing_file();
            let probe = MockDurationProbe::with_output(raw);

            let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();
            assert!(
                matches!(err, CoreError::MalformedDuration(ref kept) if kept == raw),
                "unexpected error for {raw:?}: {err:?}"
            );
        }
    }

    #[test]
    fn probe_failure_is_reported_after_download() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        let fetcher = MockMediaFetcher::writing_file();
        let probe = MockDurationProbe::failing(1);

        let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();
        assert!(matches!(err, CoreError::CommandFailed(..)));
        assert!(config.output_path().is_file());
    }

    #[test]
    fn rerun_overwrites_existing_output() {
        let tmp = tempdir().unwrap();
        let config = config_in(tmp.path());
        fs::create_dir_all(&config.output_dir).unwrap();
        fs::write(config.output_path(), b"stale").unwrap();

        let fetcher = MockMediaFetcher::new(FetchBehavior::WriteFile(b"fresh download".to_vec()));
        let probe = MockDurationProbe::with_output("3.5");

        let report = fetch_and_probe(&config, &fetcher, &probe).unwrap();
        assert_eq!(fs::read(config.output_path()).unwrap(), b"fresh download");
        assert_eq!(report.file_size, 14);
    }

    #[test]
    fn invalid_config_fails_before_fetch() {
        let tmp = tempdir().unwrap();
        let config = CoreConfigBuilder::new()
            .output_dir(tmp.path())
            .url("not-a-url")
            .build();
        let fetcher = MockMediaFetcher::writing_file();
        let probe = MockDurationProbe::with_output("1.0");

        let err = fetch_and_probe(&config, &fetcher, &probe).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(fetcher.get_received_calls().is_empty());
    }
}
