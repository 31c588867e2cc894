// Location provider that reports a configured position.
//
// Purpose
// - Stand in for device geolocation on a server and in tests.
//
// Responsibilities
// - Grant access when a position is configured, deny it otherwise.
// - Optionally wait before answering, to exercise timeouts.

use crate::shared::core::geography::Coordinate;
use crate::shared::infrastructure::location_provider::{
    AccessStatus, LocationError, LocationProvider,
};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct FixedLocationProvider {
    position: Option<Coordinate>,
    delay: Duration,
}

impl FixedLocationProvider {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self {
            position,
            delay: Duration::ZERO,
        }
    }

    pub fn at(position: Coordinate) -> Self {
        Self::new(Some(position))
    }

    pub fn denied() -> Self {
        Self::new(None)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_access(&self) -> AccessStatus {
        match self.position {
            Some(_) => AccessStatus::Granted,
            None => AccessStatus::Denied,
        }
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.position
            .ok_or_else(|| LocationError::Unavailable("no position configured".into()))
    }
}

#[cfg(test)]
mod fixed_location_provider_tests {
    use super::*;
    use crate::shared::infrastructure::location_provider::locate;
    use rstest::rstest;

    const TIMEOUT: Duration = Duration::from_millis(50);

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_configured_position() {
        let home = Coordinate::new(59.3293, 18.0686);
        let provider = FixedLocationProvider::at(home);
        assert_eq!(provider.request_access().await, AccessStatus::Granted);
        assert_eq!(locate(&provider, TIMEOUT).await, Ok(home));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_deny_access_without_a_position() {
        let provider = FixedLocationProvider::denied();
        assert_eq!(provider.request_access().await, AccessStatus::Denied);
        assert_eq!(
            locate(&provider, TIMEOUT).await,
            Err(LocationError::AccessDenied)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_read_a_position_that_is_not_configured() {
        let provider = FixedLocationProvider::denied();
        assert!(matches!(
            provider.current_position().await,
            Err(LocationError::Unavailable(_))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_time_out_when_the_provider_hangs() {
        let provider = FixedLocationProvider::at(Coordinate::new(0.0, 0.0))
            .with_delay(Duration::from_secs(5));
        assert_eq!(
            locate(&provider, TIMEOUT).await,
            Err(LocationError::TimedOut)
        );
    }
}
