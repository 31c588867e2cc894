// Purchase command handler orchestrates the write flow.
//
// Responsibilities
// - Check that the screening exists.
// - Count the tickets already held for it and call the decider.
// - Insert the accepted ticket. The store's unique index on screening id turns a lost race into a rejection.
// - A ticket id that is already taken is a store error, not a rejection.

use crate::modules::tickets::use_cases::purchase_ticket::command::PurchaseTicket;
use crate::modules::tickets::use_cases::purchase_ticket::decide::decide_purchase;
use crate::modules::tickets::use_cases::purchase_ticket::decision::Decision;
use crate::modules::tickets::use_cases::ticket_error::TicketError;
use crate::shared::core::entities::Ticket;
use crate::shared::infrastructure::entity_store::{EntityStore, StoreError};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased(Ticket),
    Rejected { screening_id: Uuid },
}

pub struct PurchaseTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PurchaseTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: PurchaseTicket) -> Result<PurchaseOutcome, TicketError> {
        let screening_id = command.screening_id;
        if self.store.find_screening(screening_id).await?.is_none() {
            return Err(TicketError::NotFound {
                entity: "screening",
                key: screening_id.to_string(),
            });
        }

        let existing_tickets = self.store.count_tickets_for_screening(screening_id).await?;

        match decide_purchase(existing_tickets, command) {
            Decision::Accepted { ticket } => match self.store.insert_ticket(ticket).await {
                Ok(ticket) => {
                    tracing::info!(ticket_id = %ticket.id, %screening_id, "ticket purchased");
                    Ok(PurchaseOutcome::Purchased(ticket))
                }
                Err(StoreError::DuplicateConstraintViolation {
                    field: "screening_id",
                    ..
                }) => {
                    tracing::info!(%screening_id, "purchase lost to a concurrent purchase");
                    Ok(PurchaseOutcome::Rejected { screening_id })
                }
                Err(error) => Err(error.into()),
            },
            Decision::Rejected { reason } => {
                tracing::info!(%screening_id, %reason, "purchase rejected");
                Ok(PurchaseOutcome::Rejected { screening_id })
            }
        }
    }
}
