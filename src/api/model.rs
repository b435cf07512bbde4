//! This module defines the read only API for interacting with the
//! application's models. It provides the interface through which views
//! observe the heart rate trend screen.
use std::{fmt::Debug, sync::Arc};
use tokio::sync::RwLock;

use crate::model::trend::{ChartPoint, ScreenState};

/// `TrendModelApi` trait.
///
/// Defines the read-only interface of the trend screen state: the observable
/// screen state and the dataset that is currently displayed.
pub trait TrendModelApi: Debug + Send + Sync {
    /// Retrieves the observable state of the screen.
    ///
    /// # Returns
    /// The current `ScreenState`.
    fn screen_state(&self) -> ScreenState;

    /// Retrieves the live dataset populated from a successful fetch.
    ///
    /// # Returns
    /// The formatted chart points; empty until a fetch succeeded with at
    /// least one sample.
    fn live_dataset(&self) -> &[ChartPoint];

    /// Retrieves the dataset the screen displays.
    ///
    /// The screen always has exactly one displayed dataset: the live dataset
    /// when it is non-empty, the placeholder dataset otherwise. Live and
    /// placeholder data are never merged.
    fn displayed_dataset(&self) -> &[ChartPoint];
}

pub type ModelHandle<T> = Arc<RwLock<T>>;
