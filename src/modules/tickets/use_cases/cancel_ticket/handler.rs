// Cancels a ticket by deleting it.
//
// Delete-if-exists: a second cancel of the same id observes NotFound. Screenings, movies and cinemas are untouched.

use crate::modules::tickets::use_cases::ticket_error::TicketError;
use crate::shared::infrastructure::entity_store::{EntityStore, StoreError};
use std::sync::Arc;
use uuid::Uuid;

pub struct CancelTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CancelTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, ticket_id: Uuid) -> Result<(), TicketError> {
        match self.store.delete_ticket(ticket_id).await {
            Ok(ticket) => {
                tracing::info!(%ticket_id, screening_id = %ticket.screening_id, "ticket cancelled");
                Ok(())
            }
            Err(StoreError::NotFound { entity, key }) => Err(TicketError::NotFound { entity, key }),
            Err(error) => Err(error.into()),
        }
    }
}
