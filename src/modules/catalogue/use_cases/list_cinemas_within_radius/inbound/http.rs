use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::catalogue::use_cases::query_error::QueryError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct NearbyCinemasParams {
    pub radius_meters: Option<f64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<NearbyCinemasParams>,
) -> impl IntoResponse {
    let radius_meters = params.radius_meters.unwrap_or(state.search_radius_meters);
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.list_cinemas_within_radius.handle(radius_meters).await {
        Ok(names) => Json(names).into_response(),
        Err(QueryError::LocationUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
