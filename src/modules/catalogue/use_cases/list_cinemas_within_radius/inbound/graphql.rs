use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListCinemasWithinRadiusQuery;

#[Object]
impl ListCinemasWithinRadiusQuery {
    async fn cinemas_nearby(
        &self,
        context: &Context<'_>,
        radius_meters: Option<f64>,
    ) -> GqlResult<Vec<String>> {
        let state = context.data_unchecked::<AppState>();
        let radius_meters = radius_meters.unwrap_or(state.search_radius_meters);
        if !radius_meters.is_finite() || radius_meters < 0.0 {
            return Err(async_graphql::Error::new("radius must be a non-negative number"));
        }
        Ok(state.list_cinemas_within_radius.handle(radius_meters).await?)
    }
}
