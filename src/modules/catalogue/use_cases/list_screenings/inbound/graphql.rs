use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::modules::catalogue::use_cases::list_screenings::projection::ScreeningView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlScreening {
    pub screening_id: Uuid,
    pub time: NaiveTime,
    pub time_label: String,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub runtime_minutes: u16,
    pub runtime_label: String,
    pub release_date: NaiveDate,
    pub release_year: i32,
    pub poster_path: String,
    pub cinema_id: Uuid,
    pub cinema_name: String,
    pub city: String,
}

impl From<ScreeningView> for GqlScreening {
    fn from(v: ScreeningView) -> Self {
        Self {
            screening_id: v.screening_id,
            time: v.time,
            time_label: v.time_label,
            movie_id: v.movie_id,
            movie_title: v.movie_title,
            runtime_minutes: v.runtime_minutes,
            runtime_label: v.runtime_label,
            release_date: v.release_date,
            release_year: v.release_year,
            poster_path: v.poster_path,
            cinema_id: v.cinema_id,
            cinema_name: v.cinema_name,
            city: v.city,
        }
    }
}

#[derive(Default)]
pub struct ListScreeningsQuery;

#[Object]
impl ListScreeningsQuery {
    async fn screenings(
        &self,
        context: &Context<'_>,
        cinema_name: String,
    ) -> GqlResult<Vec<GqlScreening>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.list_screenings.handle(&cinema_name).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
