use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListCitiesQuery;

#[Object]
impl ListCitiesQuery {
    async fn cities(&self, context: &Context<'_>) -> GqlResult<Vec<String>> {
        let state = context.data_unchecked::<AppState>();
        let cities = state.list_cities.handle().await?;
        Ok(cities.into_iter().collect())
    }
}
