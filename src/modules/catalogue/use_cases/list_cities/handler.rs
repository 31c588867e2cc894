// Lists the distinct cities that have at least one cinema.
//
// The set is ordered for stable output. Callers choose their own display order.

use crate::modules::catalogue::use_cases::query_error::QueryError;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct ListCitiesHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListCitiesHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<BTreeSet<String>, QueryError> {
        let cinemas = self.store.list_cinemas().await?;
        Ok(cinemas.into_iter().map(|cinema| cinema.city).collect())
    }
}
