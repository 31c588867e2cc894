// Seed handler creates reference data in the entity store.
//
// Responsibilities
// - Create movies and cinemas first, then screenings linked to them.
// - Refuse a document that repeats a movie title, since screenings refer to movies by title.
// - Resolve screening references against the document, falling back to cinemas already stored.
// - Stop at the first failure. Records created before it are kept.

use crate::modules::catalogue::use_cases::seed_catalogue::command::SeedDocument;
use crate::shared::core::entities::NewScreening;
use crate::shared::infrastructure::entity_store::{EntityStore, StoreError};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("seed document repeats {entity}: {key}")]
    DuplicateReference { entity: &'static str, key: String },

    #[error("screening references unknown {entity}: {key}")]
    UnknownReference { entity: &'static str, key: String },

    #[error("could not read seed document: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse seed document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub movies: usize,
    pub cinemas: usize,
    pub screenings: usize,
}

pub struct SeedCatalogueHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SeedCatalogueHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, document: SeedDocument) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        let mut titles: HashSet<&str> = HashSet::new();
        if let Some(repeated) = document
            .movies
            .iter()
            .find(|movie| !titles.insert(movie.title.as_str()))
        {
            return Err(SeedError::DuplicateReference {
                entity: "movie",
                key: repeated.title.clone(),
            });
        }

        let mut movie_ids: HashMap<String, Uuid> = HashMap::new();
        for movie in document.movies {
            let created = self.store.create_movie(movie).await?;
            movie_ids.insert(created.title, created.id);
            report.movies += 1;
        }

        let mut cinema_ids: HashMap<String, Uuid> = HashMap::new();
        for cinema in document.cinemas {
            let created = self.store.create_cinema(cinema).await?;
            cinema_ids.insert(created.name, created.id);
            report.cinemas += 1;
        }

        for screening in document.screenings {
            let movie_id = *movie_ids.get(&screening.movie).ok_or_else(|| {
                SeedError::UnknownReference {
                    entity: "movie",
                    key: screening.movie.clone(),
                }
            })?;
            let cinema_id = match cinema_ids.get(&screening.cinema) {
                Some(id) => *id,
                None => {
                    self.store
                        .find_cinema_by_name(&screening.cinema)
                        .await?
                        .ok_or_else(|| SeedError::UnknownReference {
                            entity: "cinema",
                            key: screening.cinema.clone(),
                        })?
                        .id
                }
            };

            self.store
                .create_screening(NewScreening {
                    time: screening.time,
                    movie_id,
                    cinema_id,
                })
                .await?;
            report.screenings += 1;
        }

        tracing::info!(
            movies = report.movies,
            cinemas = report.cinemas,
            screenings = report.screenings,
            "catalogue seeded"
        );
        Ok(report)
    }
}
