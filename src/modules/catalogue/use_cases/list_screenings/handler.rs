// Lists the screenings at a named cinema, earliest first.
//
// Fails with NotFound when the cinema does not exist. A cinema without screenings yields an empty list.

use crate::modules::catalogue::use_cases::list_screenings::projection::ScreeningView;
use crate::modules::catalogue::use_cases::query_error::QueryError;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct ListScreeningsHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListScreeningsHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cinema_name: &str) -> Result<Vec<ScreeningView>, QueryError> {
        let cinema = self
            .store
            .find_cinema_by_name(cinema_name)
            .await?
            .ok_or_else(|| QueryError::NotFound {
                entity: "cinema",
                key: cinema_name.to_string(),
            })?;

        let mut screenings: Vec<ScreeningView> = self
            .store
            .list_screenings_by_cinema(cinema.id)
            .await?
            .into_iter()
            .map(ScreeningView::from)
            .collect();
        screenings.sort_by(|a, b| a.time.cmp(&b.time).then(a.movie_title.cmp(&b.movie_title)));
        Ok(screenings)
    }
}
