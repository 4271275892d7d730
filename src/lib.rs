pub mod cli;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod siri;
pub mod snapshot;
pub mod telemetry;

pub use error::{Result, SnapshotError};
pub use snapshot::{MonitoredStop, SnapshotResponse, VehicleRecord};
