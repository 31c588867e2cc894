use async_graphql::{Context, Object, Result as GqlResult};
use uuid::Uuid;

use crate::shell::state::AppState;

#[derive(Default)]
pub struct CancelTicketMutation;

#[Object]
impl CancelTicketMutation {
    async fn cancel_ticket(&self, context: &Context<'_>, ticket_id: Uuid) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.cancel_ticket.handle(ticket_id).await?;
        Ok(true)
    }
}
