//! Web layer for the transit information server.
//!
//! Provides the JSON API and serves the single-page frontend.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
