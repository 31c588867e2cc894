// Location provider port.
//
// Purpose
// - Abstract the device or service that reports where the user is.
//
// Responsibilities
// - Ask for access, then read the current position.
// - Bound the whole exchange by a timeout, since the collaborator may hang.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::shared::core::geography::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location access denied")]
    AccessDenied,

    #[error("location unavailable: {0}")]
    Unavailable(String),

    #[error("location request timed out")]
    TimedOut,
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_access(&self) -> AccessStatus;
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

pub async fn locate<TProvider>(
    provider: &TProvider,
    timeout: Duration,
) -> Result<Coordinate, LocationError>
where
    TProvider: LocationProvider + ?Sized,
{
    let exchange = async {
        match provider.request_access().await {
            AccessStatus::Granted => provider.current_position().await,
            AccessStatus::Denied => Err(LocationError::AccessDenied),
        }
    };

    tokio::time::timeout(timeout, exchange)
        .await
        .unwrap_or(Err(LocationError::TimedOut))
}

pub mod fixed;
