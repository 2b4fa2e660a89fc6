use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::planner::RoutePlanner;
use metro_server::stations::StationDirectory;
use metro_server::web::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Load stations (fail fast if unavailable)
    let directory =
        StationDirectory::load(&config.stations_path).expect("Failed to load station directory");
    info!(
        path = %config.stations_path.display(),
        cities = directory.cities().len(),
        stations = directory.station_count(),
        "loaded stations"
    );
    if directory.city(&config.default_city).is_none() {
        warn!(city = %config.default_city, "default city is not in the directory");
    }

    let route_config = config.route_config().expect("Invalid route configuration");
    let planner = RoutePlanner::new(route_config);

    // Build app state
    let state = AppState::new(directory, planner, &config.cache, &config.default_city);

    // Create router
    let app = create_router(state);

    let addr = config.addr;
    info!("Metro route planner listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health                      - Health check");
    info!("  GET  /api/cities                  - List cities");
    info!("  GET  /api/cities/:slug/stations   - List stations of a city");
    info!("  POST /api/path/min-stations       - Route with fewest stations");
    info!("  POST /api/path/min-time           - Fastest route");
    info!("  POST /api/path/min-fare           - Cheapest route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
