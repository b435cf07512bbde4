//! Provider Model
//!
//! This module defines the types at the fitness provider boundary: the raw
//! sample wire format, the requested read scopes, the authorization outcome
//! and the failure taxonomy of the weekly fetch.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// One raw heart rate reading at a point in time, as returned by the
/// external provider.
///
/// The provider contract guarantees at least `value` and `startDate`
/// (an ISO-8601 instant); any additional fields are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Sample {
    /// Heart rate reading in beats per minute.
    pub value: f64,
    /// Instant the reading was taken.
    #[serde(rename = "startDate", with = "time::serde::iso8601")]
    pub start_date: OffsetDateTime,
}

/// Read capabilities requested from the fitness provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Read access to fitness activity data.
    #[serde(rename = "fitness.activity.read")]
    FitnessActivityRead,
    /// Read access to heart rate data.
    #[serde(rename = "fitness.heart_rate.read")]
    HeartRateRead,
}

/// Exactly the two capabilities the weekly fetch requires.
pub const READ_SCOPES: [Scope; 2] = [Scope::FitnessActivityRead, Scope::HeartRateRead];

/// Outcome of the provider authorization handshake.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// The provider granted the requested scopes.
    Authorized,
    /// The provider denied the request.
    Denied,
}

/// Terminal failure reasons of the weekly fetch.
///
/// All three are only logged; the user-visible effect is identical in each
/// case, the placeholder dataset remains displayed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The activity recognition permission was denied.
    #[error("activity recognition permission denied")]
    PermissionDenied,

    /// The provider reported failure or denied the authorization.
    #[error("fitness provider authorization denied")]
    AuthDenied,

    /// The sample fetch itself errored (network or provider-side).
    #[error("heart rate fetch failed: {0}")]
    FetchFailed(String),
}
