//! Serde model of the SIRI vehicle-monitoring JSON document.
//!
//! Only the path the tools read is modelled:
//! `Siri.ServiceDelivery.VehicleMonitoringDelivery[].VehicleActivity[]`.
//! Every other field in the response is ignored.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiriDocument {
    pub siri: Siri,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Siri {
    pub service_delivery: ServiceDelivery,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceDelivery {
    /// The API answers a single-line request with exactly one delivery;
    /// only the first one is read.
    pub vehicle_monitoring_delivery: Vec<VehicleMonitoringDelivery>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleMonitoringDelivery {
    pub vehicle_activity: Vec<VehicleActivity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleActivity {
    pub monitored_vehicle_journey: MonitoredVehicleJourney,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoredVehicleJourney {
    pub vehicle_location: VehicleLocation,
    pub monitored_call: MonitoredCall,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleLocation {
    /// Kept as received so `40` and `40.0` render differently.
    pub latitude: Number,
    pub longitude: Number,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoredCall {
    /// Usually a string. Buses between stops report an empty object `{}`.
    ///
    /// `None` means the key is absent; a JSON `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub stop_point_name: Option<Value>,
    pub extensions: Option<CallExtensions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallExtensions {
    pub distances: Option<Distances>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Distances {
    #[serde(default, deserialize_with = "present")]
    pub presentable_distance: Option<Value>,
}

// Plain `Value` fields turn a missing key into `Null`, which would hide the
// difference between "absent" and "present but null".
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
