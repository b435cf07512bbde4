//! Controller Module
//!
//! This module defines the traits for the application's core functionality:
//! requesting runtime permissions, talking to the external fitness data
//! provider, assembling the weekly heart rate fetch, and mutating the trend
//! screen state.
use crate::model::provider::{AuthStatus, FetchError, Sample, Scope};
use crate::model::trend::ChartPoint;
use anyhow::Result;
use async_trait::async_trait;
use time::OffsetDateTime;

use super::model::TrendModelApi;

/// Outcome of a runtime permission request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user granted the permission (or the platform does not require it).
    Granted,
    /// The user denied the permission.
    Denied,
}

/// PermissionsApi trait
///
/// This trait defines the asynchronous API for requesting OS-level runtime
/// permissions. Platforms without runtime consent report `Granted` without
/// showing a prompt.
#[async_trait]
pub trait PermissionsApi {
    /// Request the activity recognition permission.
    ///
    /// May trigger a user-visible OS prompt outside this application's
    /// control.
    async fn request_activity_recognition(&mut self) -> Result<PermissionStatus>;
}

/// FitnessProviderApi trait
///
/// This trait defines the asynchronous API of the external fitness data
/// provider. It provides methods to authorize against the provider and to
/// fetch heart rate samples for a bounded time range.
#[async_trait]
pub trait FitnessProviderApi {
    /// Authorize against the provider with the given read scopes.
    ///
    /// May trigger an external authorization flow outside this screen's
    /// control.
    ///
    /// # Arguments
    ///
    /// * `scopes` - The capabilities to request.
    async fn authorize(&mut self, scopes: &[Scope]) -> Result<AuthStatus>;

    /// Fetch heart rate samples within `[start, end]`.
    ///
    /// # Arguments
    ///
    /// * `start` - Inclusive start of the time range.
    /// * `end` - Inclusive end of the time range.
    ///
    /// # Returns
    /// The raw samples in the order the provider returns them. Zero samples
    /// in range is not an error.
    async fn heart_rate_samples(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<Sample>>;
}

/// HeartRateSourceApi trait
///
/// This trait defines the data source adapter: one permission request, one
/// authorization handshake, one time-bounded sample fetch. A single failed
/// attempt is terminal for the current mount; no retries are performed.
#[async_trait]
pub trait HeartRateSourceApi {
    /// Fetch the last seven days of heart rate samples.
    ///
    /// # Returns
    /// The raw sample list (possibly empty) on success, or the failure
    /// reason of the first step that failed.
    async fn fetch_weekly_heart_rate(&mut self) -> Result<Vec<Sample>, FetchError>;
}

/// TrendApi trait
///
/// This trait extends the `TrendModelApi` trait with the mutating operations
/// of the screen's fetch lifecycle. Only the application controller drives
/// these transitions.
#[async_trait]
pub trait TrendApi: TrendModelApi {
    /// Mark the one-shot fetch as started.
    ///
    /// Valid exactly once per mount, from the initial state.
    async fn begin_fetch(&mut self) -> Result<()>;

    /// Replace the live dataset wholesale with the formatted fetch result.
    ///
    /// # Arguments
    ///
    /// * `points` - The formatted chart points; may be empty.
    async fn complete_fetch(&mut self, points: Vec<ChartPoint>) -> Result<()>;

    /// Mark the fetch as failed. The displayed dataset stays on the
    /// placeholder.
    ///
    /// # Arguments
    ///
    /// * `error` - The terminal failure reason.
    async fn fail_fetch(&mut self, error: FetchError) -> Result<()>;
}
