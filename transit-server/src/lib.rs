//! Transit information server.
//!
//! Serves a single-page app together with a small JSON API: the supported
//! transit systems, their stops, and which car to board to be closest to a
//! given station exit.

pub mod config;
pub mod logging;
pub mod placement;
pub mod stops;
pub mod web;
