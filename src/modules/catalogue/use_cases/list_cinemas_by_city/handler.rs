// Lists the names of the cinemas in one city, sorted by name.

use crate::modules::catalogue::use_cases::query_error::QueryError;
use crate::shared::infrastructure::entity_store::EntityStore;
use std::sync::Arc;

pub struct ListCinemasByCityHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListCinemasByCityHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, city: &str) -> Result<Vec<String>, QueryError> {
        let mut names: Vec<String> = self
            .store
            .list_cinemas()
            .await?
            .into_iter()
            .filter(|cinema| cinema.city == city)
            .map(|cinema| cinema.name)
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod list_cinemas_by_city_handler_tests {
    use super::*;
    use crate::tests::fixtures::catalogue::springfield_catalogue;
    use rstest::rstest;

    #[rstest]
    #[case("Springfield", vec!["Grand", "Roxy"])]
    #[case("Shelbyville", vec!["Odeon"])]
    #[case("Capital City", vec![])]
    #[case("springfield", vec![])]
    #[tokio::test]
    async fn it_should_list_the_cinemas_in_the_city(
        #[case] city: &str,
        #[case] expected: Vec<&str>,
    ) {
        let catalogue = springfield_catalogue().await;
        let handler = ListCinemasByCityHandler::new(catalogue.store);

        let names = handler.handle(city).await.expect("handle failed");
        assert_eq!(names, expected);
    }
}
