// Lists every ticket in the store, oldest purchase first.

use crate::modules::tickets::use_cases::list_tickets::projection::TicketView;
use crate::modules::tickets::use_cases::ticket_error::TicketError;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct ListTicketsHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListTicketsHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<TicketView>, TicketError> {
        let mut tickets: Vec<TicketView> = self
            .store
            .list_tickets()
            .await?
            .into_iter()
            .map(TicketView::from)
            .collect();
        tickets.sort_by(|a, b| {
            a.purchased_at
                .cmp(&b.purchased_at)
                .then(a.ticket_id.cmp(&b.ticket_id))
        });
        Ok(tickets)
    }
}
