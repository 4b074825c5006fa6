//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::stops::{StopRecord, TransitSystem};

/// Query for the best car to board.
///
/// `origin`/`destination` are accepted as aliases of `station`/`exit`.
#[derive(Debug, Default, Deserialize)]
pub struct BestCarRequest {
    pub station: Option<String>,
    pub origin: Option<String>,
    pub exit: Option<String>,
    pub destination: Option<String>,

    /// Line the rider is on, needed at multi-line stations
    pub line: Option<String>,
}

impl BestCarRequest {
    /// The station, preferring `origin` when both are given.
    pub fn station(&self) -> Option<&str> {
        first_non_empty(self.origin.as_deref(), self.station.as_deref())
    }

    /// The exit, preferring `destination` when both are given.
    pub fn exit(&self) -> Option<&str> {
        first_non_empty(self.destination.as_deref(), self.exit.as_deref())
    }

    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }
}

fn first_non_empty<'a>(preferred: Option<&'a str>, other: Option<&'a str>) -> Option<&'a str> {
    preferred.filter(|s| !s.is_empty()).or(other)
}

/// Query for the stop listing.
#[derive(Debug, Default, Deserialize)]
pub struct StopsRequest {
    /// Transit system identifier; the demo catalogue is listed when absent
    pub system: Option<String>,

    /// Case-insensitive substring of the stop name
    pub name: Option<String>,

    /// Case-insensitive substring of the line
    pub line: Option<String>,
}

impl StopsRequest {
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// A stop in listing results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResult {
    /// `<system id>:<name in snake case>`, e.g. `ttc:union_station`
    pub id: String,
    pub name: String,
    pub line: String,
    pub system: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub location: Location,
}

/// Coordinates of a stop, either of which may be unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl StopResult {
    pub fn from_record(record: StopRecord) -> Self {
        let system_id = TransitSystem::parse(&record.system)
            .map(|s| s.id().to_string())
            .unwrap_or_else(|| record.system.to_lowercase());
        let id = format!("{}:{}", system_id, record.name.to_lowercase().replace(' ', "_"));

        Self {
            id,
            location: Location {
                lat: record.lat,
                lon: record.lon,
            },
            name: record.name,
            line: record.line,
            system: record.system,
            lat: record.lat,
            lon: record.lon,
        }
    }

    /// Whether the stop passes the optional name and line filters.
    ///
    /// Empty filters match everything.
    pub fn matches(&self, name: Option<&str>, line: Option<&str>) -> bool {
        contains_ignore_case(&self.name, name) && contains_ignore_case(&self.line, line)
    }
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) if !needle.is_empty() => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        _ => true,
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// A supported system, short form.
#[derive(Debug, Serialize)]
pub struct SystemSummary {
    pub id: &'static str,
    pub name: &'static str,
}

/// Response for the supported systems listing.
#[derive(Debug, Serialize)]
pub struct SupportedSystemsResponse {
    pub systems: Vec<SystemSummary>,
}

/// A supported system with its region.
#[derive(Debug, Serialize)]
pub struct TransitSystemResult {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

impl From<TransitSystem> for SystemSummary {
    fn from(system: TransitSystem) -> Self {
        Self {
            id: system.id(),
            name: system.label(),
        }
    }
}

impl From<TransitSystem> for TransitSystemResult {
    fn from(system: TransitSystem) -> Self {
        Self {
            id: system.id(),
            name: system.label(),
            region: system.region(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_car_aliases() {
        let req = BestCarRequest {
            origin: Some("Union".into()),
            station: Some("Kipling".into()),
            exit: Some("Front Street".into()),
            ..Default::default()
        };
        assert_eq!(req.station(), Some("Union"));
        assert_eq!(req.exit(), Some("Front Street"));

        let req = BestCarRequest {
            origin: Some(String::new()),
            station: Some("Kipling".into()),
            destination: Some("Main".into()),
            ..Default::default()
        };
        assert_eq!(req.station(), Some("Kipling"));
        assert_eq!(req.exit(), Some("Main"));

        let req = BestCarRequest::default();
        assert_eq!(req.station(), None);
        assert_eq!(req.exit(), None);
        assert_eq!(req.line(), None);
    }

    #[test]
    fn stop_ids_use_system_id() {
        let stop = StopResult::from_record(StopRecord::new("Union Station", TransitSystem::Go));
        assert_eq!(stop.id, "go:union_station");
        assert_eq!(stop.system, "GO Transit");

        let stop = StopResult::from_record(StopRecord::new("Times Sq - 42 St", TransitSystem::Mta));
        assert_eq!(stop.id, "mta:times_sq_-_42_st");
    }

    #[test]
    fn location_mirrors_coordinates() {
        let record = StopRecord::new("Kipling", TransitSystem::Ttc).with_location(43.636, -79.535);
        let stop = StopResult::from_record(record);
        assert_eq!(stop.location.lat, Some(43.636));
        assert_eq!(stop.location.lon, Some(-79.535));

        let json = serde_json::to_value(&stop).unwrap();
        assert_eq!(json["location"]["lat"], serde_json::json!(43.636));
        assert_eq!(json["lat"], serde_json::json!(43.636));
    }

    #[test]
    fn filters() {
        let stop = StopResult::from_record(StopRecord::new("Union Station", TransitSystem::Ttc));
        assert!(stop.matches(None, None));
        assert!(stop.matches(Some(""), Some("")));
        assert!(stop.matches(Some("union"), None));
        assert!(stop.matches(Some("STATION"), Some("ttc")));
        assert!(!stop.matches(Some("kipling"), None));
        assert!(!stop.matches(None, Some("go")));
    }

    #[test]
    fn blank_system_is_absent() {
        let req = StopsRequest {
            system: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(req.system(), None);
    }
}
