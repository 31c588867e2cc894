// Command data type for purchasing a ticket.
//
// Purpose
// - Express the intent to claim one screening.
//
// Responsibilities
// - Carry the new ticket id and the purchase time chosen by the caller.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseTicket {
    pub ticket_id: Uuid,
    pub screening_id: Uuid,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseTicket {
    pub fn now(screening_id: Uuid) -> Self {
        Self {
            ticket_id: Uuid::now_v7(),
            screening_id,
            purchased_at: Utc::now(),
        }
    }
}
