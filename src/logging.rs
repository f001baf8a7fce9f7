//! Logging setup.
//!
//! Events go to stderr in a compact human format, filtered by `RUST_LOG`
//! with a `todoql=info` fallback (`todoql=debug` under `--verbose`). When a
//! log file is configured, a second layer appends daily-rotated JSON lines
//! for machine consumption.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let fallback = if verbose { "todoql=debug" } else { "todoql=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let registry = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact(),
    );

    match log_file {
        Some(path) => registry
            .with(
                fmt::layer()
                    .with_writer(file_appender(&path))
                    .with_ansi(false)
                    .json(),
            )
            .init(),
        None => registry.init(),
    }
}

/// Daily-rotated appender for the requested path. The appender suffixes
/// the current date to the file name; the parent directory is created on
/// demand.
fn file_appender(path: &Path) -> RollingFileAppender {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(directory);

    let file_name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("todoql.log"));
    tracing_appender::rolling::daily(directory, file_name)
}
