//! Car placement data.
//!
//! The table maps canonical station keys to their exits, and each exit to
//! the advice on which car to board. It is built once at start-up and
//! shared read-only afterwards.

use std::collections::HashMap;

use serde::Serialize;

/// Which car (1-indexed) to board.
///
/// Serialises as a bare JSON integer or array so that clients can tell
/// "one definite car" apart from "any of these cars is equally good".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Car {
    /// Exactly one car is closest to the exit.
    Single(u32),
    /// Several cars are equally close, listed in platform order.
    AnyOf(Vec<u32>),
}

/// Boarding advice for one exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementInfo {
    pub car: Car,
    pub notes: String,
    pub explanation: String,
}

impl PlacementInfo {
    pub fn new(car: Car, notes: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            car,
            notes: notes.into(),
            explanation: explanation.into(),
        }
    }
}

/// An exit the table knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitEntry {
    /// Advice is published for this exit.
    Known(PlacementInfo),
    /// The exit exists but its advice has not been published yet.
    Pending,
}

/// Immutable station → exit → advice lookup.
///
/// Every key is stored in canonical form (see [`super::normalize`]).
#[derive(Debug, Clone, Default)]
pub struct CarPlacementTable {
    stations: HashMap<String, HashMap<String, ExitEntry>>,
}

impl CarPlacementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exit entry, creating the station if needed.
    ///
    /// Keys are expected to already be canonical.
    pub fn insert(&mut self, station: &str, exit: &str, entry: ExitEntry) {
        self.stations
            .entry(station.to_string())
            .or_default()
            .insert(exit.to_string(), entry);
    }

    /// Whether the station is present at all.
    pub fn contains_station(&self, station: &str) -> bool {
        self.stations.contains_key(station)
    }

    /// Exits for a station, if the station is known.
    pub fn exits(&self, station: &str) -> Option<&HashMap<String, ExitEntry>> {
        self.stations.get(station)
    }

    /// Look up one exit of one station.
    pub fn get(&self, station: &str, exit: &str) -> Option<&ExitEntry> {
        self.stations.get(station)?.get(exit)
    }

    /// Iterate over the canonical station keys.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// The built-in car placement data served by the application.
pub fn builtin_placements() -> CarPlacementTable {
    let mut table = CarPlacementTable::new();

    table.insert(
        "union station",
        "front street",
        ExitEntry::Known(PlacementInfo::new(
            Car::Single(3),
            "Stairs to Front Street and Bay St. are closest to car 3 (center of platform).",
            "Use car 3 — closest to Front Street exit stairs.",
        )),
    );
    table.insert(
        "union station",
        "york concourse",
        ExitEntry::Known(PlacementInfo::new(
            Car::AnyOf(vec![2, 3]),
            "Both cars 2 and 3 are near the York Concourse escalators.",
            "Use car 2 or 3 — both are close to York Concourse exit.",
        )),
    );
    table.insert(
        "multioption",
        "central",
        ExitEntry::Known(PlacementInfo::new(
            Car::AnyOf(vec![2, 3]),
            "Either car 2 or 3 is optimal for Central exit.",
            "Use car 2 or 3 — both are close to Central exit.",
        )),
    );
    table.insert("underconstruction", "main", ExitEntry::Pending);
    table.insert(
        "bloor-yonge",
        "yonge",
        ExitEntry::Known(PlacementInfo::new(
            Car::Single(4),
            "Specify line: Bloor or Yonge.",
            "Please clarify which line you are on at Bloor-Yonge.",
        )),
    );
    table.insert(
        "st george",
        "bedford",
        ExitEntry::Known(PlacementInfo::new(
            Car::Single(2),
            "Bedford exit is closest to car 2.",
            "Use car 2 — closest to Bedford exit stairs.",
        )),
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::normalize;

    #[test]
    fn builtin_keys_are_canonical() {
        let table = builtin_placements();
        for station in table.stations() {
            assert_eq!(normalize(Some(station)).as_deref(), Some(station));
            for exit in table.exits(station).unwrap().keys() {
                assert_eq!(normalize(Some(exit)).as_deref(), Some(exit.as_str()));
            }
        }
    }

    #[test]
    fn builtin_contents() {
        let table = builtin_placements();
        assert_eq!(table.len(), 5);
        assert!(table.contains_station("union station"));
        assert!(table.contains_station("st george"));
        assert!(!table.contains_station("nowhereville"));
    }

    #[test]
    fn known_entries_have_explanations() {
        let table = builtin_placements();
        for station in table.stations() {
            for entry in table.exits(station).unwrap().values() {
                if let ExitEntry::Known(info) = entry {
                    assert!(!info.explanation.is_empty());
                    assert!(!info.notes.is_empty());
                }
            }
        }
    }

    #[test]
    fn explanations_keep_their_wording() {
        let table = builtin_placements();
        let Some(ExitEntry::Known(info)) = table.get("union station", "front street") else {
            panic!("union station/front street missing");
        };
        assert_eq!(info.explanation, "Use car 3 — closest to Front Street exit stairs.");

        let Some(ExitEntry::Known(info)) = table.get("st george", "bedford") else {
            panic!("st george/bedford missing");
        };
        assert_eq!(info.explanation, "Use car 2 — closest to Bedford exit stairs.");
    }

    #[test]
    fn multi_car_entries_list_several_cars() {
        let table = builtin_placements();
        let Some(ExitEntry::Known(info)) = table.get("multioption", "central") else {
            panic!("multioption/central missing");
        };
        assert_eq!(info.car, Car::AnyOf(vec![2, 3]));
    }

    #[test]
    fn pending_is_distinct_from_missing() {
        let table = builtin_placements();
        assert_eq!(
            table.get("underconstruction", "main"),
            Some(&ExitEntry::Pending)
        );
        assert_eq!(table.get("underconstruction", "side"), None);
    }

    #[test]
    fn insert_creates_station() {
        let mut table = CarPlacementTable::new();
        assert!(table.is_empty());
        table.insert("kipling", "bus bay", ExitEntry::Pending);
        assert!(table.contains_station("kipling"));
        assert_eq!(table.get("kipling", "bus bay"), Some(&ExitEntry::Pending));
    }

    #[test]
    fn car_serialises_untagged() {
        assert_eq!(serde_json::to_string(&Car::Single(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&Car::AnyOf(vec![2, 3])).unwrap(),
            "[2,3]"
        );
    }
}
