mod basic;
mod client;

pub use basic::BasicClient;
pub use client::{HttpClient, HttpResponse};

use std::time::Instant;

use reqwest::Url;
use tracing::{debug, info, warn};

use crate::error::{Result, SnapshotError};
use crate::parser::parse_document;
use crate::snapshot::SnapshotResponse;

pub const DEFAULT_BASE_URL: &str = "http://api.prod.obanyc.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const VEHICLE_MONITORING_PATH: &str = "/api/siri/vehicle-monitoring.json";
const SLOW_FETCH_SECS: u64 = 15;
const ERROR_BODY_PREVIEW: usize = 200;

/// Builds `<base>/api/siri/vehicle-monitoring.json?key=<key>&LineRef=<line>`.
pub fn build_url(base_url: &str, api_key: &str, line_ref: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .and_then(|base| base.join(VEHICLE_MONITORING_PATH))
        .map_err(|e| SnapshotError::Url {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

    url.query_pairs_mut()
        .append_pair("key", api_key)
        .append_pair("LineRef", line_ref);

    Ok(url)
}

/// Performs the GET and returns the body of a 2xx response.
pub fn fetch_bytes<C: HttpClient>(client: &C, url: &Url) -> Result<Vec<u8>> {
    let fetch_start = Instant::now();
    let resp = client.get(url)?;

    let elapsed = fetch_start.elapsed();
    if elapsed.as_secs() > SLOW_FETCH_SECS {
        warn!(elapsed_secs = elapsed.as_secs(), "Vehicle-monitoring fetch was slow");
    }

    if !resp.status.is_success() {
        let body = String::from_utf8_lossy(&resp.body);
        return Err(SnapshotError::Status {
            status: resp.status,
            body: body.chars().take(ERROR_BODY_PREVIEW).collect(),
        });
    }

    debug!(status = %resp.status, bytes = resp.body.len(), "Response received");
    Ok(resp.body)
}

/// Fetches, decodes and extracts the current vehicles on `line_ref`.
///
/// This is the whole pipeline short of rendering; both binaries call it.
///
/// # Errors
///
/// Fails on an invalid base URL, a transport error or timeout, a non-2xx
/// status, an undecodable body, or a missing field on the traversal path.
/// Nothing is returned for a partially readable response.
#[tracing::instrument(skip(client, api_key))]
pub fn fetch_snapshot<C: HttpClient>(
    client: &C,
    base_url: &str,
    api_key: &str,
    line_ref: &str,
) -> Result<SnapshotResponse> {
    let url = build_url(base_url, api_key, line_ref)?;
    let bytes = fetch_bytes(client, &url)?;
    let doc = parse_document(&bytes)?;
    let snapshot = SnapshotResponse::from_document(line_ref, &doc)?;

    info!(vehicles = snapshot.count(), "Snapshot fetched");
    Ok(snapshot)
}
