use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListCinemasParams {
    pub city: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListCinemasParams>,
) -> impl IntoResponse {
    match state.list_cinemas_by_city.handle(&params.city).await {
        Ok(names) => Json(names).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
