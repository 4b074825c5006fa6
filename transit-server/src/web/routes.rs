//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::placement::{Placement, ResolveError};
use crate::stops::{TransitSystem, demo_stops};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` holds the built frontend. Paths that are neither API routes
/// nor files in `static_dir` are answered with its `index.html`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health))
        .route("/api/supported_systems", get(supported_systems))
        .route("/api/transit_systems", get(transit_systems))
        .route("/api/stops", get(list_stops))
        .route("/api/best_car", get(best_car))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn supported_systems() -> Json<SupportedSystemsResponse> {
    let systems = TransitSystem::ALL.into_iter().map(SystemSummary::from).collect();
    Json(SupportedSystemsResponse { systems })
}

async fn transit_systems() -> Json<Vec<TransitSystemResult>> {
    Json(
        TransitSystem::ALL
            .into_iter()
            .map(TransitSystemResult::from)
            .collect(),
    )
}

/// List stops, scraped live for a system or from the demo catalogue.
async fn list_stops(
    State(state): State<AppState>,
    Query(req): Query<StopsRequest>,
) -> Json<Vec<StopResult>> {
    let records = match req.system() {
        Some(system) => state.fetcher.fetch_stops(system).await,
        None => demo_stops(),
    };

    let stops = records
        .into_iter()
        .map(StopResult::from_record)
        .filter(|s| s.matches(req.name.as_deref(), req.line.as_deref()))
        .collect();

    Json(stops)
}

/// Which car to board for a station exit.
async fn best_car(
    State(state): State<AppState>,
    Query(req): Query<BestCarRequest>,
) -> Result<Json<Placement>, AppError> {
    let placement = state
        .resolver
        .resolve(req.station(), req.exit(), req.line())?;
    Ok(Json(placement))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        let message = e.to_string();
        match e {
            ResolveError::NotFound { .. } => AppError::NotFound { message },
            ResolveError::Unavailable => AppError::Unavailable { message },
            ResolveError::AmbiguousLine { .. } | ResolveError::InvalidRequest => {
                AppError::BadRequest { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_map_to_statuses() {
        let cases = [
            (ResolveError::InvalidRequest, StatusCode::BAD_REQUEST),
            (
                ResolveError::NotFound {
                    station: "x".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (ResolveError::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                ResolveError::AmbiguousLine {
                    station: "Bloor-Yonge".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, status) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
