use async_graphql::{Context, Enum, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::tickets::use_cases::purchase_ticket::command::PurchaseTicket;
use crate::modules::tickets::use_cases::purchase_ticket::handler::PurchaseOutcome;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum PurchaseStatus {
    Purchased,
    Rejected,
}

#[derive(SimpleObject)]
pub struct GqlPurchase {
    pub status: PurchaseStatus,
    pub screening_id: Uuid,
    pub ticket_id: Option<Uuid>,
    pub purchased_at: Option<DateTime<Utc>>,
}

impl From<PurchaseOutcome> for GqlPurchase {
    fn from(outcome: PurchaseOutcome) -> Self {
        match outcome {
            PurchaseOutcome::Purchased(ticket) => Self {
                status: PurchaseStatus::Purchased,
                screening_id: ticket.screening_id,
                ticket_id: Some(ticket.id),
                purchased_at: Some(ticket.purchased_at),
            },
            PurchaseOutcome::Rejected { screening_id } => Self {
                status: PurchaseStatus::Rejected,
                screening_id,
                ticket_id: None,
                purchased_at: None,
            },
        }
    }
}

#[derive(Default)]
pub struct PurchaseTicketMutation;

#[Object]
impl PurchaseTicketMutation {
    async fn purchase_ticket(
        &self,
        context: &Context<'_>,
        screening_id: Uuid,
    ) -> GqlResult<GqlPurchase> {
        let state = context.data_unchecked::<AppState>();
        let outcome = state
            .purchase_ticket
            .handle(PurchaseTicket::now(screening_id))
            .await?;
        Ok(outcome.into())
    }
}
