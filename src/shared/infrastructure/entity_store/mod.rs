// Entity store port.
//
// Purpose
// - Describe the relational storage the use cases need, without implementing it.
//
// Responsibilities
// - Create reference data (movies, cinemas, screenings) with uniqueness and link checks.
// - Insert tickets under a unique index on screening id, delete tickets by id.
// - Offer eager-join reads so each query resolves its relations in one call.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::core::entities::{
    Cinema, Movie, NewCinema, NewMovie, NewScreening, Screening, ScreeningWithRelations, Ticket,
    TicketWithRelations,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("duplicate {entity}.{field}: {value}")]
    DuplicateConstraintViolation {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, StoreError>;
    async fn create_cinema(&self, cinema: NewCinema) -> Result<Cinema, StoreError>;
    async fn create_screening(&self, screening: NewScreening) -> Result<Screening, StoreError>;

    async fn list_cinemas(&self) -> Result<Vec<Cinema>, StoreError>;
    async fn find_cinema_by_name(&self, name: &str) -> Result<Option<Cinema>, StoreError>;
    async fn find_screening(&self, screening_id: Uuid) -> Result<Option<Screening>, StoreError>;
    async fn list_screenings_by_cinema(
        &self,
        cinema_id: Uuid,
    ) -> Result<Vec<ScreeningWithRelations>, StoreError>;

    async fn count_tickets_for_screening(&self, screening_id: Uuid) -> Result<usize, StoreError>;
    // Fails with DuplicateConstraintViolation when the screening already has a ticket.
    async fn insert_ticket(&self, ticket: Ticket) -> Result<Ticket, StoreError>;
    // Fails with NotFound when no ticket has this id.
    async fn delete_ticket(&self, ticket_id: Uuid) -> Result<Ticket, StoreError>;
    async fn list_tickets(&self) -> Result<Vec<TicketWithRelations>, StoreError>;
}

pub mod in_memory;
