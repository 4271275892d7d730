//! Arguments shared by both binaries.

use std::time::Duration;

use clap::Args;

use crate::error::Result;
use crate::fetch::{self, BasicClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::snapshot::SnapshotResponse;

#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Vehicle-monitoring API key
    #[arg(value_name = "API_KEY")]
    pub api_key: String,

    /// Line reference of the bus route, e.g. "B52"
    #[arg(value_name = "LINE_REF")]
    pub line_ref: String,

    /// Scheme and host of the vehicle-monitoring API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ApiArgs {
    /// Runs the fetch pipeline over a fresh blocking client.
    pub fn fetch_snapshot(&self) -> Result<SnapshotResponse> {
        let client = BasicClient::new(Duration::from_secs(self.timeout_secs))?;
        fetch::fetch_snapshot(&client, &self.base_url, &self.api_key, &self.line_ref)
    }
}
