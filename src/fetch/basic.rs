use std::time::Duration;

use reqwest::Url;

use super::client::{HttpClient, HttpResponse};
use crate::error::{Result, SnapshotError};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Blocking client with a bounded request timeout.
pub struct BasicClient(reqwest::blocking::Client);

impl BasicClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(CONNECT_TIMEOUT_SECS)))
            .build()
            .map_err(SnapshotError::Client)?;
        Ok(Self(client))
    }
}

impl HttpClient for BasicClient {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        // The query carries the API key; keep it out of error messages.
        let request_failed = |source: reqwest::Error| SnapshotError::Request {
            url: redact_query(url),
            source: source.without_url(),
        };

        let resp = self.0.get(url.clone()).send().map_err(request_failed)?;
        let status = resp.status();
        let body = resp.bytes().map_err(request_failed)?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

fn redact_query(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}
