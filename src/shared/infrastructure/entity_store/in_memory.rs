// In memory implementation of the EntityStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep one table per entity plus unique indexes on cinema name and ticket screening id.
// - Check foreign keys on insert.
// - Hold the write lock across check and insert so tickets are insert-if-absent.
// - Refuse a ticket whose id is already taken, leaving both ticket maps untouched.

use crate::shared::core::entities::{
    Cinema, Movie, NewCinema, NewMovie, NewScreening, Screening, ScreeningWithRelations, Ticket,
    TicketWithRelations,
};
use crate::shared::infrastructure::entity_store::{EntityStore, StoreError};
use std::collections::HashMap;
#[cfg(test)]
use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(test)]
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    movies: HashMap<Uuid, Movie>,
    cinemas: HashMap<Uuid, Cinema>,
    cinema_ids_by_name: HashMap<String, Uuid>,
    screenings: HashMap<Uuid, Screening>,
    tickets: HashMap<Uuid, Ticket>,
    ticket_ids_by_screening: HashMap<Uuid, Uuid>,
}

impl Tables {
    fn resolve_screening(&self, screening: &Screening) -> Result<ScreeningWithRelations, StoreError> {
        let movie = self.movies.get(&screening.movie_id).ok_or_else(|| {
            StoreError::Backend(format!("screening {} has a dangling movie", screening.id))
        })?;
        let cinema = self.cinemas.get(&screening.cinema_id).ok_or_else(|| {
            StoreError::Backend(format!("screening {} has a dangling cinema", screening.id))
        })?;
        Ok(ScreeningWithRelations {
            screening: screening.clone(),
            movie: movie.clone(),
            cinema: cinema.clone(),
        })
    }
}

#[derive(Default)]
pub struct InMemoryEntityStore {
    tables: RwLock<Tables>,
    #[cfg(test)]
    delay_count_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    // Widens the gap between counting tickets and inserting one.
    #[cfg(test)]
    pub fn set_delay_count_ms(&self, ms: u64) {
        self.delay_count_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        self.ensure_online()?;
        movie.validate().map_err(StoreError::Validation)?;

        let record = Movie {
            id: Uuid::now_v7(),
            title: movie.title,
            runtime_minutes: movie.runtime_minutes,
            release_date: movie.release_date,
            poster_ref: movie.poster_ref,
        };
        self.tables
            .write()
            .await
            .movies
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn create_cinema(&self, cinema: NewCinema) -> Result<Cinema, StoreError> {
        self.ensure_online()?;
        cinema.validate().map_err(StoreError::Validation)?;

        let mut tables = self.tables.write().await;
        if tables.cinema_ids_by_name.contains_key(&cinema.name) {
            return Err(StoreError::DuplicateConstraintViolation {
                entity: "cinema",
                field: "name",
                value: cinema.name,
            });
        }

        let record = Cinema {
            id: Uuid::now_v7(),
            name: cinema.name,
            city: cinema.city,
            coordinate: cinema.coordinate,
        };
        tables
            .cinema_ids_by_name
            .insert(record.name.clone(), record.id);
        tables.cinemas.insert(record.id, record.clone());
        Ok(record)
    }

    async fn create_screening(&self, screening: NewScreening) -> Result<Screening, StoreError> {
        self.ensure_online()?;

        let mut tables = self.tables.write().await;
        if !tables.movies.contains_key(&screening.movie_id) {
            return Err(StoreError::NotFound {
                entity: "movie",
                key: screening.movie_id.to_string(),
            });
        }
        if !tables.cinemas.contains_key(&screening.cinema_id) {
            return Err(StoreError::NotFound {
                entity: "cinema",
                key: screening.cinema_id.to_string(),
            });
        }

        let record = Screening {
            id: Uuid::now_v7(),
            time: screening.time,
            movie_id: screening.movie_id,
            cinema_id: screening.cinema_id,
        };
        tables.screenings.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_cinemas(&self) -> Result<Vec<Cinema>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.cinemas.values().cloned().collect())
    }

    async fn find_cinema_by_name(&self, name: &str) -> Result<Option<Cinema>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .cinema_ids_by_name
            .get(name)
            .and_then(|id| tables.cinemas.get(id))
            .cloned())
    }

    async fn find_screening(&self, screening_id: Uuid) -> Result<Option<Screening>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .screenings
            .get(&screening_id)
            .cloned())
    }

    async fn list_screenings_by_cinema(
        &self,
        cinema_id: Uuid,
    ) -> Result<Vec<ScreeningWithRelations>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        tables
            .screenings
            .values()
            .filter(|screening| screening.cinema_id == cinema_id)
            .map(|screening| tables.resolve_screening(screening))
            .collect()
    }

    async fn count_tickets_for_screening(&self, screening_id: Uuid) -> Result<usize, StoreError> {
        self.ensure_online()?;
        let count = self
            .tables
            .read()
            .await
            .tickets
            .values()
            .filter(|ticket| ticket.screening_id == screening_id)
            .count();

        #[cfg(test)]
        {
            let delay = self.delay_count_ms.load(Ordering::SeqCst);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
        }
        Ok(count)
    }

    async fn insert_ticket(&self, ticket: Ticket) -> Result<Ticket, StoreError> {
        self.ensure_online()?;

        let mut tables = self.tables.write().await;
        if !tables.screenings.contains_key(&ticket.screening_id) {
            return Err(StoreError::NotFound {
                entity: "screening",
                key: ticket.screening_id.to_string(),
            });
        }
        if tables.tickets.contains_key(&ticket.id) {
            return Err(StoreError::DuplicateConstraintViolation {
                entity: "ticket",
                field: "id",
                value: ticket.id.to_string(),
            });
        }
        if tables
            .ticket_ids_by_screening
            .contains_key(&ticket.screening_id)
        {
            return Err(StoreError::DuplicateConstraintViolation {
                entity: "ticket",
                field: "screening_id",
                value: ticket.screening_id.to_string(),
            });
        }

        tables
            .ticket_ids_by_screening
            .insert(ticket.screening_id, ticket.id);
        tables.tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn delete_ticket(&self, ticket_id: Uuid) -> Result<Ticket, StoreError> {
        self.ensure_online()?;

        let mut tables = self.tables.write().await;
        let removed = tables
            .tickets
            .remove(&ticket_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "ticket",
                key: ticket_id.to_string(),
            })?;
        tables.ticket_ids_by_screening.remove(&removed.screening_id);
        Ok(removed)
    }

    async fn list_tickets(&self) -> Result<Vec<TicketWithRelations>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        tables
            .tickets
            .values()
            .map(|ticket| {
                let screening = tables.screenings.get(&ticket.screening_id).ok_or_else(|| {
                    StoreError::Backend(format!("ticket {} has a dangling screening", ticket.id))
                })?;
                Ok(TicketWithRelations {
                    ticket: ticket.clone(),
                    screening: tables.resolve_screening(screening)?,
                })
            })
            .collect()
    }
}
