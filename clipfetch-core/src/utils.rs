//! Formatting helpers for durations, file sizes, and command lines.

use std::ffi::OsStr;

/// Formats a duration in seconds with two decimals, e.g. `"12.35 seconds"`.
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.2} seconds")
}

/// Formats seconds as `HH:MM:SS` for the run summary.
///
/// Fractional seconds are truncated. Returns `??:??:??` for negative or
/// non-finite input, so a bad probe value never prints as a plausible time.
///
/// ```rust
/// assert_eq!(clipfetch_core::format_duration(212.091), "00:03:32");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats a downloaded file size with binary units (B, KiB, MiB, GiB).
///
/// ```rust
/// assert_eq!(clipfetch_core::format_bytes(1536), "1.50 KiB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Joins a program and its arguments into a single printable line.
///
/// Arguments are not quoted; the result is for display only.
#[must_use]
pub fn format_command_line<I, S>(program: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}
