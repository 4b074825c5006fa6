//! "Which car should I board?" lookup.
//!
//! Free-text station and exit names are normalised to canonical keys and
//! resolved against a fixed table of car placement advice. No I/O happens
//! here; a [`Resolver`] can be shared freely between request handlers.

mod error;
mod normalize;
mod resolve;
mod table;

pub use error::ResolveError;
pub use normalize::normalize;
pub use resolve::{Placement, Resolver};
pub use table::{Car, CarPlacementTable, ExitEntry, PlacementInfo, builtin_placements};
