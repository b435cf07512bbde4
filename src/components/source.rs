//! Heart Rate Data Source
//!
//! This module defines the data source adapter for the weekly heart rate
//! fetch. It chains the runtime permission request, the provider
//! authorization handshake and the time-bounded sample fetch; the first
//! failing step terminates the attempt.

use crate::api::controller::{
    FitnessProviderApi, HeartRateSourceApi, PermissionStatus, PermissionsApi,
};
use crate::core::constants::TREND_WINDOW;
use crate::model::provider::{AuthStatus, FetchError, Sample, READ_SCOPES};
use async_trait::async_trait;
use log::{info, warn};
use time::OffsetDateTime;

/// The data source adapter combining permissions and the provider client.
///
/// # Type Parameters
/// * `PT` - The platform permission implementation.
/// * `FT` - The fitness provider client.
pub struct HeartRateSource<PT: PermissionsApi + Send, FT: FitnessProviderApi + Send> {
    permissions: PT,
    provider: FT,
}

impl<PT: PermissionsApi + Send, FT: FitnessProviderApi + Send> HeartRateSource<PT, FT> {
    /// Creates a new `HeartRateSource`.
    ///
    /// # Arguments
    /// * `permissions` - The platform permission implementation.
    /// * `provider` - The fitness provider client.
    pub fn new(permissions: PT, provider: FT) -> Self {
        Self {
            permissions,
            provider,
        }
    }
}

#[async_trait]
impl<PT, FT> HeartRateSourceApi for HeartRateSource<PT, FT>
where
    PT: PermissionsApi + Send + Sync,
    FT: FitnessProviderApi + Send + Sync,
{
    async fn fetch_weekly_heart_rate(&mut self) -> Result<Vec<Sample>, FetchError> {
        match self.permissions.request_activity_recognition().await {
            Ok(PermissionStatus::Granted) => {}
            Ok(PermissionStatus::Denied) => {
                warn!("activity recognition permission denied");
                return Err(FetchError::PermissionDenied);
            }
            Err(e) => {
                warn!("permission request error: {}", e);
                return Err(FetchError::PermissionDenied);
            }
        }

        match self.provider.authorize(&READ_SCOPES).await {
            Ok(AuthStatus::Authorized) => {}
            Ok(AuthStatus::Denied) => {
                warn!("provider authorization denied");
                return Err(FetchError::AuthDenied);
            }
            Err(e) => {
                warn!("provider authorization error: {}", e);
                return Err(FetchError::AuthDenied);
            }
        }

        // Calendar window, not rounded to midnight.
        let end = OffsetDateTime::now_utc();
        let start = end - TREND_WINDOW;
        match self.provider.heart_rate_samples(start, end).await {
            Ok(samples) => {
                info!("fetched {} heart rate samples", samples.len());
                Ok(samples)
            }
            Err(e) => Err(FetchError::FetchFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use mockall::mock;
    use time::macros::datetime;

    mock! {
        Permissions {}
        #[async_trait]
        impl PermissionsApi for Permissions {
            async fn request_activity_recognition(&mut self) -> Result<PermissionStatus>;
        }
    }

    mock! {
        Provider {}
        #[async_trait]
        impl FitnessProviderApi for Provider {
            async fn authorize(&mut self, scopes: &[Scope]) -> Result<AuthStatus>;
            async fn heart_rate_samples(
                &self,
                start: OffsetDateTime,
                end: OffsetDateTime,
            ) -> Result<Vec<Sample>>;
        }
    }

    use crate::model::provider::Scope;

    #[tokio::test]
    async fn permission_denial_stops_before_authorization() {
        let mut permissions = MockPermissions::new();
        permissions
            .expect_request_activity_recognition()
            .returning(|| Ok(PermissionStatus::Denied));
        // No expectations on the provider: any call would panic.
        let provider = MockProvider::new();

        let mut source = HeartRateSource::new(permissions, provider);
        let result = source.fetch_weekly_heart_rate().await;
        assert_eq!(result, Err(FetchError::PermissionDenied));
    }

    #[tokio::test]
    async fn authorization_denial_stops_before_fetch() {
        let mut permissions = MockPermissions::new();
        permissions
            .expect_request_activity_recognition()
            .returning(|| Ok(PermissionStatus::Granted));
        let mut provider = MockProvider::new();
        provider
            .expect_authorize()
            .returning(|_| Ok(AuthStatus::Denied));

        let mut source = HeartRateSource::new(permissions, provider);
        let result = source.fetch_weekly_heart_rate().await;
        assert_eq!(result, Err(FetchError::AuthDenied));
    }

    #[tokio::test]
    async fn authorization_error_maps_to_auth_denied() {
        let mut permissions = MockPermissions::new();
        permissions
            .expect_request_activity_recognition()
            .returning(|| Ok(PermissionStatus::Granted));
        let mut provider = MockProvider::new();
        provider
            .expect_authorize()
            .returning(|_| Err(anyhow!("token endpoint unreachable")));

        let mut source = HeartRateSource::new(permissions, provider);
        let result = source.fetch_weekly_heart_rate().await;
        assert_eq!(result, Err(FetchError::AuthDenied));
    }

    #[tokio::test]
    async fn authorization_requests_exactly_the_two_read_scopes() {
        let mut permissions = MockPermissions::new();
        permissions
            .expect_request_activity_recognition()
            .returning(|| Ok(PermissionStatus::Granted));
        let mut provider = MockProvider::new();
        provider
            .expect_authorize()
            .withf(|scopes| scopes == READ_SCOPES.as_slice())
            .returning(|_| Ok(AuthStatus::Authorized));
        provider
            .expect_heart_rate_samples()
            .returning(|_, _| Ok(Vec::new()));

        let mut source = HeartRateSource::new(permissions, provider);
        assert_eq!(source.fetch_weekly_heart_rate().await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn fetch_window_spans_seven_calendar_days() {
        let mut permissions = MockPermissions::new();
        permissions
            .expect_request_activity_recognition()
            .returning(|| Ok(PermissionStatus::Granted));
        let mut provider = MockProvider::new();
        provider
            .expect_authorize()
            .returning(|_| Ok(AuthStatus::Authorized));
        provider
            .expect_heart_rate_samples()
            .withf(|start, end| *end - *start == TREND_WINDOW)
            .returning(|_, _| Ok(Vec::new()));

        let mut source = HeartRateSource::new(permissions, provider);
        assert!(source.fetch_weekly_heart_rate().await.is_ok());
    }

    #[tokio::test]
    async fn fetch_errors_carry_the_cause() {
        let mut permissions = MockPermissions::new();
        permissions
            .expect_request_activity_recognition()
            .returning(|| Ok(PermissionStatus::Granted));
        let mut provider = MockProvider::new();
        provider
            .expect_authorize()
            .returning(|_| Ok(AuthStatus::Authorized));
        provider
            .expect_heart_rate_samples()
            .returning(|_, _| Err(anyhow!("connection reset")));

        let mut source = HeartRateSource::new(permissions, provider);
        let result = source.fetch_weekly_heart_rate().await;
        assert_eq!(
            result,
            Err(FetchError::FetchFailed("connection reset".into()))
        );
    }

    #[tokio::test]
    async fn successful_fetch_passes_samples_through() {
        let samples = vec![Sample {
            value: 65.0,
            start_date: datetime!(2024-01-01 09:30 UTC),
        }];
        let expected = samples.clone();

        let mut permissions = MockPermissions::new();
        permissions
            .expect_request_activity_recognition()
            .returning(|| Ok(PermissionStatus::Granted));
        let mut provider = MockProvider::new();
        provider
            .expect_authorize()
            .returning(|_| Ok(AuthStatus::Authorized));
        provider
            .expect_heart_rate_samples()
            .returning(move |_, _| Ok(samples.clone()));

        let mut source = HeartRateSource::new(permissions, provider);
        assert_eq!(source.fetch_weekly_heart_rate().await, Ok(expected));
    }
}
