use thiserror::Error;

use crate::shared::infrastructure::entity_store::StoreError;
use crate::shared::infrastructure::location_provider::LocationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("could not determine location: {0}")]
    LocationUnavailable(#[from] LocationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
