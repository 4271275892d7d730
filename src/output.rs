//! Rendering of a [`SnapshotResponse`].
//!
//! Supports a CSV export of positions and stop status, and a plain-text
//! console report of bus coordinates.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use serde_json::Number;
use tracing::{debug, info};

use crate::error::Result;
use crate::snapshot::{SnapshotResponse, VehicleRecord};

pub const CSV_HEADERS: [&str; 4] = ["Latitude", "Longitude", "Stop Name", "Stop Status"];

#[derive(Serialize)]
struct CsvRow<'a> {
    latitude: &'a Number,
    longitude: &'a Number,
    stop_name: &'a str,
    stop_status: &'a str,
}

impl<'a> From<&'a VehicleRecord> for CsvRow<'a> {
    fn from(v: &'a VehicleRecord) -> Self {
        Self {
            latitude: &v.latitude,
            longitude: &v.longitude,
            stop_name: v.stop_name(),
            stop_status: v.stop_status(),
        }
    }
}

/// Writes the snapshot as CSV to `path`, replacing any existing file.
pub fn write_csv(path: &Path, snapshot: &SnapshotResponse) -> Result<()> {
    debug!(path = %path.display(), "Creating CSV file");
    let file = File::create(path)?;
    write_csv_to(file, snapshot)?;

    info!(path = %path.display(), rows = snapshot.count(), "CSV written");
    Ok(())
}

/// Writes a header row and one row per vehicle, in snapshot order.
///
/// The header is written even when there are no vehicles.
pub fn write_csv_to<W: Write>(writer: W, snapshot: &SnapshotResponse) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false) // headers come from CSV_HEADERS, not field names
        .from_writer(writer);

    writer.write_record(CSV_HEADERS)?;
    for vehicle in &snapshot.vehicles {
        writer.serialize(CsvRow::from(vehicle))?;
    }
    writer.flush()?;

    Ok(())
}

/// Prints the line, the number of buses and each bus's coordinates.
pub fn print_report<W: Write>(out: &mut W, snapshot: &SnapshotResponse) -> Result<()> {
    writeln!(out, "Bus Line : {}", snapshot.line_ref)?;
    writeln!(out, "Number of Active Buses : {}", snapshot.count())?;

    for (number, vehicle) in snapshot.vehicles.iter().enumerate() {
        writeln!(
            out,
            "Bus {} is at latitude {} and longitude {}",
            number, vehicle.latitude, vehicle.longitude
        )?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MonitoredStop;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(name)
    }

    fn vehicle(latitude: f64, longitude: f64, stop: Option<(&str, &str)>) -> VehicleRecord {
        VehicleRecord {
            latitude: Number::from_f64(latitude).unwrap(),
            longitude: Number::from_f64(longitude).unwrap(),
            stop: stop.map(|(name, distance)| MonitoredStop {
                name: name.to_string(),
                presentable_distance: distance.to_string(),
            }),
        }
    }

    fn snapshot(vehicles: Vec<VehicleRecord>) -> SnapshotResponse {
        SnapshotResponse {
            line_ref: "B52".to_string(),
            vehicles,
        }
    }

    fn csv_string(snapshot: &SnapshotResponse) -> String {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, snapshot).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_header_only_for_empty_snapshot() {
        let content = csv_string(&snapshot(vec![]));
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["Latitude,Longitude,Stop Name,Stop Status"]);
    }

    #[test]
    fn test_csv_rows_follow_snapshot_order() {
        let content = csv_string(&snapshot(vec![
            vehicle(40.6782, -73.9442, Some(("Main St", "approaching"))),
            vehicle(40.7, -74.0, None),
            vehicle(40.65, -73.95, Some(("FULTON ST", "1 stop away"))),
        ]));

        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "40.6782,-73.9442,Main St,approaching");
        assert_eq!(lines[2], "40.7,-74.0,N/A,N/A");
        assert_eq!(lines[3], "40.65,-73.95,FULTON ST,1 stop away");
    }

    #[test]
    fn test_integer_coordinates_are_written_as_received() {
        let record = VehicleRecord {
            latitude: Number::from(40),
            longitude: Number::from(-74),
            stop: None,
        };

        let content = csv_string(&snapshot(vec![record.clone()]));
        assert_eq!(content.lines().nth(1), Some("40,-74,N/A,N/A"));

        let mut out = Vec::new();
        print_report(&mut out, &snapshot(vec![record])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Bus 0 is at latitude 40 and longitude -74"));
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let content = csv_string(&snapshot(vec![vehicle(
            1.5,
            2.5,
            Some(("FULTON ST, NOSTRAND AV", "< 1 stop away")),
        )]));

        let row = content.lines().nth(1).unwrap();
        assert_eq!(row, "1.5,2.5,\"FULTON ST, NOSTRAND AV\",< 1 stop away");
    }

    #[test]
    fn test_write_csv_overwrites_existing_file() {
        let path = temp_path("siri_bus_snapshot_test_overwrite.csv");
        fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        write_csv(&path, &snapshot(vec![vehicle(1.0, 2.0, None)])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("stale"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_csv_unwritable_path_fails() {
        let path = temp_path("siri_bus_snapshot_missing_dir").join("out.csv");
        let result = write_csv(&path, &snapshot(vec![]));
        assert!(result.is_err());
    }

    #[test]
    fn test_print_report_lists_buses_by_index() {
        let mut out = Vec::new();
        print_report(
            &mut out,
            &snapshot(vec![
                vehicle(40.6782, -73.9442, None),
                vehicle(40.0, -74.0, None),
                vehicle(40.65, -73.95, Some(("Main St", "approaching"))),
            ]),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Bus Line : B52",
                "Number of Active Buses : 3",
                "Bus 0 is at latitude 40.6782 and longitude -73.9442",
                "Bus 1 is at latitude 40.0 and longitude -74.0",
                "Bus 2 is at latitude 40.65 and longitude -73.95",
            ]
        );
    }

    #[test]
    fn test_print_report_empty_snapshot() {
        let mut out = Vec::new();
        print_report(&mut out, &snapshot(vec![])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Bus Line : B52\nNumber of Active Buses : 0\n");
    }
}
