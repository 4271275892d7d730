//! Logging setup shared by both binaries.
//!
//! Human-readable events go to stderr so stdout stays free for the console
//! report. A JSON copy goes to a daily rolling file only when
//! `LOG_FILE_PATH` is set; otherwise a run leaves nothing on disk.

use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::Result;

const DEFAULT_LOG_FILE_NAME: &str = "siri_bus_snapshot.log";

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered file output is lost.
///
/// `RUST_LOG` filters stderr (default `warn`), `RUST_LOG_JSON` filters the
/// file (default `debug`) and `LOG_FILE_PATH` enables and picks the file.
///
/// # Errors
///
/// Returns [`SnapshotError::Logging`](crate::error::SnapshotError::Logging)
/// if the log directory or file cannot be created. No subscriber is
/// installed in that case.
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let file_appender = match std::env::var_os("LOG_FILE_PATH") {
        Some(path) => Some(file_appender(Path::new(&path))?),
        None => None,
    };
    let (non_blocking_file, file_guard) = match file_appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let json_layer = non_blocking_file.map(|writer| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(writer)
            .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG))
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

fn file_appender(path: &Path) -> std::result::Result<RollingFileAppender, InitError> {
    let log_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_file_name = path
        .file_name()
        .map_or_else(|| DEFAULT_LOG_FILE_NAME.to_string(), |n| n.to_string_lossy().into_owned());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_name)
        .build(log_dir)
}

// Directives from the environment win over `default`.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}
