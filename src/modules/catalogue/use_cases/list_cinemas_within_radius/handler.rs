// Proximity search over cinemas.
//
// Purpose
// - Find the cinemas within a radius of the user, or of an explicit origin.
//
// Responsibilities
// - Ask the location provider for the origin, bounded by a timeout.
// - Include a cinema when its great-circle distance is at most the radius.
// - Report a location failure as LocationUnavailable, never as an empty list.

use crate::modules::catalogue::use_cases::query_error::QueryError;
use crate::shared::core::geography::{Coordinate, distance};
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shared::infrastructure::location_provider::{LocationProvider, locate};
use std::sync::Arc;
use std::time::Duration;

pub struct ListCinemasWithinRadiusHandler<TStore, TLocation>
where
    TStore: EntityStore + 'static,
    TLocation: LocationProvider + 'static,
{
    store: Arc<TStore>,
    location: Arc<TLocation>,
    location_timeout: Duration,
}

impl<TStore, TLocation> ListCinemasWithinRadiusHandler<TStore, TLocation>
where
    TStore: EntityStore + 'static,
    TLocation: LocationProvider + 'static,
{
    pub fn new(store: Arc<TStore>, location: Arc<TLocation>, location_timeout: Duration) -> Self {
        Self {
            store,
            location,
            location_timeout,
        }
    }

    pub async fn handle(&self, radius_meters: f64) -> Result<Vec<String>, QueryError> {
        let origin = locate(&*self.location, self.location_timeout)
            .await
            .inspect_err(|error| tracing::warn!(%error, "location lookup failed"))?;
        self.handle_near(origin, radius_meters).await
    }

    pub async fn handle_near(
        &self,
        origin: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<String>, QueryError> {
        let mut names: Vec<String> = self
            .store
            .list_cinemas()
            .await?
            .into_iter()
            .filter(|cinema| distance(origin, cinema.coordinate) <= radius_meters)
            .map(|cinema| cinema.name)
            .collect();
        names.sort();
        tracing::debug!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            radius_meters,
            found = names.len(),
            "proximity search"
        );
        Ok(names)
    }
}
