//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::requests::{StatRequest, StatResponse};
use crate::router::Itinerary;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(route))
        .route("/bus/:name", get(bus_info))
        .route("/stop/:name", get(stop_info))
        .route("/requests", post(stat_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fastest route between two stops.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<Itinerary>, AppError> {
    state
        .network
        .router()
        .query(&req.from, &req.to)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no route from {} to {}", req.from, req.to),
        })
}

/// Statistics for one bus.
async fn bus_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BusResult>, AppError> {
    let stats = state
        .network
        .catalogue()
        .bus_stats(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown bus: {name}"),
        })?;
    Ok(Json(BusResult::from_stats(&name, stats)))
}

/// Buses serving one stop.
async fn stop_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopResult>, AppError> {
    let stats = state
        .network
        .catalogue()
        .stop_stats(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown stop: {name}"),
        })?;
    Ok(Json(StopResult::from_stats(&name, stats)))
}

/// Answer a batch of stat requests against the loaded network.
async fn stat_requests(
    State(state): State<AppState>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Result<Json<Vec<StatResponse>>, AppError> {
    if requests.is_empty() {
        return Err(AppError::BadRequest {
            message: "no stat requests given".to_string(),
        });
    }
    Ok(Json(state.network.handle_all(&requests)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
