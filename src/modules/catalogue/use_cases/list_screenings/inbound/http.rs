use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::catalogue::use_cases::query_error::QueryError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(cinema_name): Path<String>,
) -> impl IntoResponse {
    match state.list_screenings.handle(&cinema_name).await {
        Ok(screenings) => Json(screenings).into_response(),
        Err(QueryError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
