use std::process::ExitCode;

use tracing::{error, info};

use transit_server::config::ServerConfig;
use transit_server::logging;
use transit_server::placement::{Resolver, builtin_placements};
use transit_server::stops::StopFetcher;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match StopFetcher::new(config.fetcher.clone()) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("failed to create stop fetcher: {e}");
            return ExitCode::FAILURE;
        }
    };

    let placements = builtin_placements();
    info!(stations = placements.len(), "loaded car placement table");

    // Build app state
    let state = AppState::new(Resolver::new(placements), fetcher);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        addr = %config.addr,
        static_dir = %config.static_dir.display(),
        "transit server listening"
    );
    info!("API endpoints:");
    info!("  GET /api/health             - Health check");
    info!("  GET /api/supported_systems  - Supported transit systems");
    info!("  GET /api/transit_systems    - Transit systems with regions");
    info!("  GET /api/stops              - Stops (?system=&name=&line=)");
    info!("  GET /api/best_car           - Best car (?station=&exit=&line=)");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
