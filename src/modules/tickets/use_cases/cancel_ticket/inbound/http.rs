use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::tickets::use_cases::ticket_error::TicketError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(ticket_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.cancel_ticket.handle(ticket_id).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(TicketError::NotFound { .. }) => StatusCode::NOT_FOUND,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
