use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListCinemasByCityQuery;

#[Object]
impl ListCinemasByCityQuery {
    async fn cinemas(&self, context: &Context<'_>, city: String) -> GqlResult<Vec<String>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.list_cinemas_by_city.handle(&city).await?)
    }
}
