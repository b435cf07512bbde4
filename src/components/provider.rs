//! Provider Clients
//!
//! This module provides the concrete implementations at the external
//! boundaries: the desktop permission shim, the REST client for the fitness
//! data provider, and an offline mock client behind the `mock` feature.

use crate::api::controller::{FitnessProviderApi, PermissionStatus, PermissionsApi};
use crate::model::provider::{AuthStatus, Sample, Scope};
use anyhow::Result;
use async_trait::async_trait;
use log::{info, trace};
use serde::Deserialize;
use time::format_description::well_known::Iso8601;
use time::OffsetDateTime;

/// Permission shim for desktop targets.
///
/// Desktop platforms have no runtime consent for activity recognition, so
/// the request reports `Granted` without any prompt.
#[derive(Debug, Default)]
pub struct DesktopPermissions;

#[async_trait]
impl PermissionsApi for DesktopPermissions {
    async fn request_activity_recognition(&mut self) -> Result<PermissionStatus> {
        trace!("no runtime permission required on this platform");
        Ok(PermissionStatus::Granted)
    }
}

/// Authorization response of the provider's auth endpoint.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    success: bool,
    #[serde(default)]
    access_token: Option<String>,
}

/// Body of the provider's sample endpoint.
#[derive(Debug, Deserialize)]
struct SamplesResponse {
    samples: Vec<Sample>,
}

/// REST client for the fitness data provider.
pub struct RestFitnessClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RestFitnessClient {
    /// Creates a new client against the given provider endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }
}

#[async_trait]
impl FitnessProviderApi for RestFitnessClient {
    async fn authorize(&mut self, scopes: &[Scope]) -> Result<AuthStatus> {
        let response = self
            .http
            .post(format!("{}/auth", self.base_url))
            .json(&serde_json::json!({ "scopes": scopes }))
            .send()
            .await?
            .error_for_status()?;
        let auth: AuthResponse = response.json().await?;
        if auth.success {
            info!("provider authorization granted");
            self.token = auth.access_token;
            Ok(AuthStatus::Authorized)
        } else {
            Ok(AuthStatus::Denied)
        }
    }

    async fn heart_rate_samples(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<Sample>> {
        let mut request = self
            .http
            .get(format!("{}/heartrate/samples", self.base_url))
            .query(&[
                ("startDate", start.format(&Iso8601::DEFAULT)?),
                ("endDate", end.format(&Iso8601::DEFAULT)?),
            ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?.error_for_status()?;
        let body: SamplesResponse = response.json().await?;
        Ok(body.samples)
    }
}

/// Offline provider for development without provider credentials.
///
/// Always authorizes and returns one plausible resting heart rate reading
/// per day of the requested window.
#[cfg(feature = "mock")]
#[derive(Debug, Default)]
pub struct MockFitnessClient;

#[cfg(feature = "mock")]
#[async_trait]
impl FitnessProviderApi for MockFitnessClient {
    async fn authorize(&mut self, _scopes: &[Scope]) -> Result<AuthStatus> {
        Ok(AuthStatus::Authorized)
    }

    async fn heart_rate_samples(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<Sample>> {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let days = (end - start).whole_days().max(0);
        let samples = (0..days)
            .map(|day| Sample {
                value: (66.0 + rng.gen_range(-4.0..8.0)).round(),
                start_date: start + time::Duration::days(day),
            })
            .collect();
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_decodes_grant_with_token() {
        let json = r#"{"success": true, "access_token": "abc123"}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(auth.success);
        assert_eq!(auth.access_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn auth_response_decodes_denial_without_token() {
        let json = r#"{"success": false}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert!(!auth.success);
        assert!(auth.access_token.is_none());
    }

    #[test]
    fn samples_response_decodes_provider_payload() {
        let json = r#"{"samples": [
            {"value": 65.0, "startDate": "2024-01-01T09:30:00Z"},
            {"value": 71.0, "startDate": "2024-01-02T09:30:00Z"}
        ]}"#;
        let body: SamplesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.samples.len(), 2);
        assert_eq!(body.samples[0].value, 65.0);
    }

    #[tokio::test]
    async fn desktop_permissions_grant_without_prompt() {
        let mut permissions = DesktopPermissions;
        let status = permissions.request_activity_recognition().await.unwrap();
        assert_eq!(status, PermissionStatus::Granted);
    }

    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn mock_client_returns_one_sample_per_day() {
        use time::macros::datetime;
        let client = MockFitnessClient;
        let start = datetime!(2024-01-01 12:00 UTC);
        let end = datetime!(2024-01-08 12:00 UTC);
        let samples = client.heart_rate_samples(start, end).await.unwrap();
        assert_eq!(samples.len(), 7);
        assert!(samples.iter().all(|s| s.value > 40.0 && s.value < 120.0));
    }
}
