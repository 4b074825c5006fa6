//! Supported transit systems.

use std::fmt;

use super::extract::{ExtractRule, Tag};

/// A transit system whose stops can be listed.
///
/// # Examples
///
/// ```
/// use transit_server::stops::TransitSystem;
///
/// assert_eq!(TransitSystem::parse("GO Transit"), Some(TransitSystem::Go));
/// assert_eq!(TransitSystem::parse("ttc"), Some(TransitSystem::Ttc));
/// assert_eq!(TransitSystem::Go.label(), "GO Transit");
/// assert_eq!(TransitSystem::parse("zzz-unknown"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitSystem {
    Go,
    Ttc,
    Mta,
    Bart,
}

impl TransitSystem {
    /// All supported systems, in listing order.
    pub const ALL: [TransitSystem; 4] = [
        TransitSystem::Go,
        TransitSystem::Ttc,
        TransitSystem::Mta,
        TransitSystem::Bart,
    ];

    /// Parse a user-supplied identifier, ignoring case and edge whitespace.
    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier.trim().to_lowercase().as_str() {
            "go" | "go transit" => Some(TransitSystem::Go),
            "ttc" => Some(TransitSystem::Ttc),
            "mta" => Some(TransitSystem::Mta),
            "bart" => Some(TransitSystem::Bart),
            _ => None,
        }
    }

    /// Short identifier used in URLs and stop ids.
    pub fn id(self) -> &'static str {
        match self {
            TransitSystem::Go => "go",
            TransitSystem::Ttc => "ttc",
            TransitSystem::Mta => "mta",
            TransitSystem::Bart => "bart",
        }
    }

    /// Display label, also used as the `line` and `system` of its stops.
    pub fn label(self) -> &'static str {
        match self {
            TransitSystem::Go => "GO Transit",
            TransitSystem::Ttc => "TTC",
            TransitSystem::Mta => "MTA",
            TransitSystem::Bart => "BART",
        }
    }

    pub fn region(self) -> &'static str {
        match self {
            TransitSystem::Go | TransitSystem::Ttc => "Toronto",
            TransitSystem::Mta => "New York",
            TransitSystem::Bart => "San Francisco",
        }
    }

    /// Public page listing this system's stations.
    pub fn default_source_url(self) -> &'static str {
        match self {
            TransitSystem::Go => "https://www.gotransit.com/en/the-future-go/stations",
            TransitSystem::Ttc => "https://www.ttc.ca/subway-stations",
            TransitSystem::Mta => "https://new.mta.info/maps/subway-line-maps",
            TransitSystem::Bart => "https://www.bart.gov/stations",
        }
    }

    /// How stop names are picked out of the source page.
    pub fn extract_rule(self) -> ExtractRule {
        match self {
            TransitSystem::Go => ExtractRule::TagContaining {
                tag: Tag::H3,
                needle: "station",
            },
            TransitSystem::Ttc => ExtractRule::AnchorWithClass("station-link"),
            TransitSystem::Mta => ExtractRule::TagContaining {
                tag: Tag::Span,
                needle: "station",
            },
            TransitSystem::Bart => ExtractRule::AnchorWithClass("station"),
        }
    }
}

impl fmt::Display for TransitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
