//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::planner::{EstimateError, ResolveError, RouteResolver};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(find_route))
        .route("/api/stations/search", get(search_stations))
        .route("/api/lines", get(list_lines))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find a route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let present = |value: Option<String>| value.filter(|v| !v.is_empty());
    let (Some(from), Some(to)) = (present(req.from), present(req.to)) else {
        return Err(AppError::MissingParameter {
            message: "both 'from' and 'to' are required".to_string(),
        });
    };

    let route = RouteResolver::new(&state.network).resolve(&from, &to)?;

    Ok(Json(RouteResponse::from_route(
        &from,
        &to,
        &route,
        &state.fares,
    )?))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);

    let stations = state
        .network
        .search(&req.q, limit)
        .into_iter()
        .map(StationResult::from_station)
        .collect();

    Json(StationSearchResponse { stations })
}

/// List every line with its stations.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .network
        .lines()
        .iter()
        .map(LineResult::from_line)
        .collect();

    Json(LinesResponse { lines })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    MissingParameter { message: String },
    UnknownStation { message: String },
    NoRoute { message: String },
    Internal { message: String },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::InvalidStation(_) => AppError::UnknownStation {
                message: e.to_string(),
            },
            ResolveError::NotFound { .. } => AppError::NoRoute {
                message: e.to_string(),
            },
        }
    }
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::MissingParameter { message } => {
                (StatusCode::BAD_REQUEST, "missing_parameter", message)
            }
            AppError::UnknownStation { message } => {
                (StatusCode::NOT_FOUND, "unknown_station", message)
            }
            AppError::NoRoute { message } => (StatusCode::NOT_FOUND, "no_route", message),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
            }
        };

        warn!(%status, code, "{message}");

        let body = Json(ErrorResponse {
            error: message,
            code,
        });
        (status, body).into_response()
    }
}
