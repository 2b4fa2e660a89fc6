//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::graph::{Graph, GraphError};
use crate::planner::{CostModel, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/api/cities/:slug", get(get_city))
        .route("/api/cities/:slug/stations", get(list_stations))
        .route("/api/path/find", post(min_stations_path))
        .route("/api/path/min-stations", post(min_stations_path))
        .route("/api/path/min-time", post(min_time_path))
        .route("/api/path/min-fare", post(min_fare_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Active cities with line and station totals.
async fn list_cities(State(state): State<AppState>) -> Json<Vec<CityResult>> {
    let cities = state
        .directory
        .cities()
        .into_iter()
        .map(|city| {
            let summary = state.directory.summary(&city.slug).unwrap_or_default();
            CityResult::new(city, summary)
        })
        .collect();

    Json(cities)
}

/// One active city.
async fn get_city(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CityResult>, AppError> {
    let city = state.directory.city(&slug).ok_or_else(city_not_found)?;
    let summary = state.directory.summary(&slug).unwrap_or_default();
    Ok(Json(CityResult::new(city, summary)))
}

/// Stations of one active city, sorted by name.
async fn list_stations(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<StationResult>>, AppError> {
    let stations = state
        .directory
        .stations_in(&slug)
        .ok_or_else(city_not_found)?;
    Ok(Json(
        stations.iter().map(StationResult::from_station).collect(),
    ))
}

/// Route with the fewest stations.
async fn min_stations_path(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StationsPathResponse>, AppError> {
    let (req, graph) = prepare(&state, &body, CostModel::FewestStations).await?;
    let route = state
        .planner
        .stations_on(&graph, req.from.trim(), req.to.trim())?;
    Ok(Json(route.into()))
}

/// Fastest route, charging for line changes.
async fn min_time_path(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TimePathResponse>, AppError> {
    let (req, graph) = prepare(&state, &body, CostModel::MinTime).await?;
    let route = state
        .planner
        .time_on(&graph, req.from.trim(), req.to.trim())?;
    Ok(Json(route.into()))
}

/// Cheapest route by fare.
async fn min_fare_path(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FarePathResponse>, AppError> {
    let (req, graph) = prepare(&state, &body, CostModel::MinFare).await?;
    let route = state
        .planner
        .fare_on(&graph, req.from.trim(), req.to.trim())?;
    Ok(Json(route.into()))
}

/// Parse and validate a path request, then fetch the graph for its city.
async fn prepare(
    state: &AppState,
    body: &Bytes,
    mode: CostModel,
) -> Result<(PathRequest, Arc<Graph>), AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PathRequest = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid path request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    if req.from.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Start station (from) is required".to_string(),
        });
    }
    if req.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Destination station (to) is required".to_string(),
        });
    }

    let city = req
        .city_slug
        .as_deref()
        .filter(|slug| !slug.trim().is_empty())
        .unwrap_or(&*state.default_city)
        .to_string();

    let graph = state
        .graph(&city, mode)
        .await?
        .ok_or_else(city_not_found)?;
    Ok((req, graph))
}

fn city_not_found() -> AppError {
    AppError::NotFound {
        message: "City not found".to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::StationNotFound(_) => AppError::NotFound {
                message: "Invalid station names".to_string(),
            },
            RouteError::NoRoute { .. } => AppError::NotFound {
                message: "No path found between these stations".to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        AppError::Internal {
            message: format!("malformed station data: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
