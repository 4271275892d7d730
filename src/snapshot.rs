use serde_json::{Number, Value};

use crate::error::{Result, SnapshotError};
use crate::siri::{SiriDocument, VehicleActivity};

/// Written in place of both stop columns when a bus has no monitored stop.
pub const NOT_AVAILABLE: &str = "N/A";

/// The stop a bus is heading to, as reported by its monitored call.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoredStop {
    pub name: String,
    /// Human-readable proximity, e.g. "approaching" or "1 stop away".
    pub presentable_distance: String,
}

/// One bus's reported state at fetch time.
///
/// Coordinates are decimal degrees in the API's own numeric form.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub latitude: Number,
    pub longitude: Number,
    pub stop: Option<MonitoredStop>,
}

impl VehicleRecord {
    pub fn from_activity(activity: &VehicleActivity) -> Result<Self> {
        let journey = &activity.monitored_vehicle_journey;
        let call = &journey.monitored_call;

        let stop_point_name = call
            .stop_point_name
            .as_ref()
            .ok_or(SnapshotError::MissingField("MonitoredCall.StopPointName"))?;

        // Only the literal `{}` means "no stop"; null and "" pass through.
        let stop = if is_empty_object(stop_point_name) {
            None
        } else {
            let distance = call
                .extensions
                .as_ref()
                .and_then(|e| e.distances.as_ref())
                .and_then(|d| d.presentable_distance.as_ref())
                .ok_or(SnapshotError::MissingField(
                    "MonitoredCall.Extensions.Distances.PresentableDistance",
                ))?;

            Some(MonitoredStop {
                name: render_value(stop_point_name),
                presentable_distance: render_value(distance),
            })
        };

        Ok(Self {
            latitude: journey.vehicle_location.latitude.clone(),
            longitude: journey.vehicle_location.longitude.clone(),
            stop,
        })
    }

    pub fn stop_name(&self) -> &str {
        self.stop.as_ref().map_or(NOT_AVAILABLE, |s| s.name.as_str())
    }

    pub fn stop_status(&self) -> &str {
        self.stop
            .as_ref()
            .map_or(NOT_AVAILABLE, |s| s.presentable_distance.as_str())
    }
}

/// All vehicles reported for one line reference, in API order.
#[derive(Debug, Clone, Default)]
pub struct SnapshotResponse {
    pub line_ref: String,
    pub vehicles: Vec<VehicleRecord>,
}

impl SnapshotResponse {
    pub fn from_document(line_ref: &str, doc: &SiriDocument) -> Result<Self> {
        let delivery = doc
            .siri
            .service_delivery
            .vehicle_monitoring_delivery
            .first()
            .ok_or(SnapshotError::MissingField("VehicleMonitoringDelivery[0]"))?;

        let vehicles = delivery
            .vehicle_activity
            .iter()
            .map(VehicleRecord::from_activity)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            line_ref: line_ref.to_string(),
            vehicles,
        })
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}

fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}

/// Text form of a JSON value as written to output: strings verbatim,
/// `null` as an empty field, anything else as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
