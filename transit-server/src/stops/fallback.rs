//! Hand-curated stop lists.
//!
//! Used whenever a live scrape fails, and as the demo catalogue served when
//! no system is requested.

use super::client::StopRecord;
use super::system::TransitSystem;

/// Representative stops served when a system's source page is unusable.
///
/// Never empty.
pub fn fallback_stops(system: TransitSystem) -> Vec<StopRecord> {
    let names: &[&str] = match system {
        TransitSystem::Ttc => &["Union Station", "Kipling", "Yorkdale", "Bloor-Yonge"],
        TransitSystem::Go => &["Union Station", "Oakville", "Kitchener", "Pickering"],
        TransitSystem::Mta => &[
            "Times Sq - 42 St",
            "Grand Central - 42 St",
            "34 St - Penn Station",
            "Fulton St",
        ],
        TransitSystem::Bart => &[
            "Embarcadero",
            "Powell St",
            "12th St/Oakland City Center",
            "Daly City",
        ],
    };

    names
        .iter()
        .map(|name| StopRecord::new(*name, system))
        .collect()
}

/// Stops with known coordinates, served when no system filter is given.
pub fn demo_stops() -> Vec<StopRecord> {
    [
        ("Union Station", TransitSystem::Go, 43.645, -79.380),
        ("Kipling", TransitSystem::Ttc, 43.636, -79.535),
        ("Yorkdale", TransitSystem::Ttc, 43.724, -79.454),
        ("Oakville", TransitSystem::Go, 43.450, -79.682),
    ]
    .into_iter()
    .map(|(name, system, lat, lon)| StopRecord::new(name, system).with_location(lat, lon))
    .collect()
}
