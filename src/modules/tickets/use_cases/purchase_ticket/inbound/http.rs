use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::tickets::use_cases::purchase_ticket::command::PurchaseTicket;
use crate::modules::tickets::use_cases::purchase_ticket::handler::PurchaseOutcome;
use crate::modules::tickets::use_cases::ticket_error::TicketError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PurchaseTicketBody {
    pub screening_id: Uuid,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PurchaseTicketBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .purchase_ticket
        .handle(PurchaseTicket::now(body.screening_id))
        .await
    {
        Ok(PurchaseOutcome::Purchased(ticket)) => (StatusCode::CREATED, Json(ticket)).into_response(),
        Ok(PurchaseOutcome::Rejected { .. }) => StatusCode::CONFLICT.into_response(),
        Err(TicketError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
