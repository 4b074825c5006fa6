//! Resolution of a (station, exit, line) query to boarding advice.

use serde::Serialize;
use tracing::debug;

use super::error::ResolveError;
use super::normalize::normalize;
use super::table::{Car, CarPlacementTable, ExitEntry};

/// Station whose placement data has not been published yet.
const UNDER_CONSTRUCTION: &str = "underconstruction";

/// Stations served by more than one line, where the line must be given.
const MULTI_LINE_STATIONS: &[&str] = &["bloor-yonge"];

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Canonical station key
    pub station: String,

    /// Canonical exit key
    pub exit: String,

    /// Car to board, either one car or several equally good ones
    pub car: Car,

    pub notes: String,

    pub explanation: String,
}

/// Looks up car placement advice in a fixed table.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: CarPlacementTable,
}

impl Resolver {
    /// Create a resolver over the given table.
    pub fn new(table: CarPlacementTable) -> Self {
        Self { table }
    }

    /// Resolve raw user input to boarding advice.
    ///
    /// Rules are applied in order and the first that applies wins:
    ///
    /// 1. station or exit normalises to nothing: [`ResolveError::InvalidRequest`]
    /// 2. station is under construction: [`ResolveError::Unavailable`]
    /// 3. multi-line station without a line: [`ResolveError::AmbiguousLine`]
    /// 4. station not in the table: [`ResolveError::NotFound`]
    /// 5. exit unknown or pending: [`ResolveError::InvalidRequest`]
    ///
    /// Exit matching is exact on the canonical key.
    pub fn resolve(
        &self,
        station: Option<&str>,
        exit: Option<&str>,
        line: Option<&str>,
    ) -> Result<Placement, ResolveError> {
        let (Some(station_key), Some(exit_key)) = (normalize(station), normalize(exit)) else {
            return Err(ResolveError::InvalidRequest);
        };

        if station_key == UNDER_CONSTRUCTION {
            return Err(ResolveError::Unavailable);
        }

        let has_line = line.is_some_and(|l| !l.trim().is_empty());
        if MULTI_LINE_STATIONS.contains(&station_key.as_str()) && !has_line {
            return Err(ResolveError::AmbiguousLine {
                station: display_name(&station_key),
            });
        }

        let Some(exits) = self.table.exits(&station_key) else {
            debug!(station = %station_key, "station not in placement table");
            return Err(ResolveError::NotFound {
                station: station.unwrap_or_default().to_string(),
            });
        };

        let info = match exits.get(&exit_key) {
            Some(ExitEntry::Known(info)) => info,
            Some(ExitEntry::Pending) | None => {
                debug!(station = %station_key, exit = %exit_key, "no advice for exit");
                return Err(ResolveError::InvalidRequest);
            }
        };

        Ok(Placement {
            station: station_key,
            exit: exit_key,
            car: info.car.clone(),
            notes: info.notes.clone(),
            explanation: info.explanation.clone(),
        })
    }
}

/// Human-readable form of a canonical key, e.g. "bloor-yonge" -> "Bloor-Yonge".
fn display_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c == ' ' || c == '-';
    }
    out
}
