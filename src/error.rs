//! Error types for the snapshot pipeline.
//!
//! Each variant names the stage that failed, so the binaries can report
//! "where" as well as "what" before exiting.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid base URL '{url}': {reason}")]
    Url { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response is not a valid vehicle-monitoring document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing field {0}")]
    MissingField(&'static str),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to open log file: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
