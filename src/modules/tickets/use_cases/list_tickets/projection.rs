// Read model for a ticket with its screening, movie and cinema resolved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalogue::use_cases::list_screenings::projection::ScreeningView;
use crate::shared::core::entities::TicketWithRelations;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketView {
    pub ticket_id: Uuid,
    pub purchased_at: DateTime<Utc>,
    pub screening: ScreeningView,
}

impl From<TicketWithRelations> for TicketView {
    fn from(record: TicketWithRelations) -> Self {
        Self {
            ticket_id: record.ticket.id,
            purchased_at: record.ticket.purchased_at,
            screening: record.screening.into(),
        }
    }
}
