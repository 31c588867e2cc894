use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::catalogue::use_cases::list_screenings::inbound::graphql::GqlScreening;
use crate::modules::tickets::use_cases::list_tickets::projection::TicketView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTicket {
    pub ticket_id: Uuid,
    pub purchased_at: DateTime<Utc>,
    pub screening: GqlScreening,
}

impl From<TicketView> for GqlTicket {
    fn from(v: TicketView) -> Self {
        Self {
            ticket_id: v.ticket_id,
            purchased_at: v.purchased_at,
            screening: v.screening.into(),
        }
    }
}

#[derive(Default)]
pub struct ListTicketsQuery;

#[Object]
impl ListTicketsQuery {
    async fn tickets(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTicket>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.list_tickets.handle().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
