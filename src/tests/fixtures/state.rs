// Application state wired over the Springfield catalogue, for inbound tests.

use crate::shared::infrastructure::location_provider::fixed::FixedLocationProvider;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::catalogue::{SPRINGFIELD, SpringfieldCatalogue, springfield_catalogue};
use std::sync::Arc;
use std::time::Duration;

pub async fn springfield_state() -> (AppState, SpringfieldCatalogue) {
    state_with_location(FixedLocationProvider::at(SPRINGFIELD)).await
}

pub async fn state_with_location(
    location: FixedLocationProvider,
) -> (AppState, SpringfieldCatalogue) {
    let catalogue = springfield_catalogue().await;
    let config = AppConfig {
        location_timeout: Duration::from_millis(100),
        ..AppConfig::default()
    };
    let state = AppState::new(catalogue.store.clone(), Arc::new(location), &config);
    (state, catalogue)
}
