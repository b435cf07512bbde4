//! Core Events
//!
//! This module defines events used for communication between the one-shot
//! fetch task and the application controller. Events are central to the
//! application's event-driven architecture.
use crate::model::provider::{FetchError, Sample};

/// Enumeration of all application-level events.
///
/// These events drive the fetch-then-render pipeline: the spawned fetch task
/// publishes them onto the event bus, and the application controller applies
/// them to the trend model.
#[derive(Clone, Debug)]
pub enum AppEvent {
    /// The one-shot weekly fetch has started.
    FetchStarted,

    /// The fetch succeeded with the raw sample list (possibly empty).
    SamplesArrived(Vec<Sample>),

    /// The fetch failed terminally at one of its steps.
    FetchFailed(FetchError),
}
