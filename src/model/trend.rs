//! Trend Model
//!
//! This module defines the model for the heart rate trend screen: the
//! plot-ready chart points, the observable screen state, and the pure
//! formatting of raw samples into chart points.

use crate::api::{controller::TrendApi, model::TrendModelApi};
use crate::core::constants::PLACEHOLDER_DATASET;
use crate::model::provider::{FetchError, Sample};
use anyhow::{ensure, Result};
use async_trait::async_trait;
use time::Weekday;

/// A plot-ready (weekday label, value) pair derived from a `Sample`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChartPoint {
    /// Short English weekday name (Mon..Sun).
    pub label: &'static str,
    /// Heart rate reading in beats per minute, unchanged from the sample.
    pub value: f64,
}

/// The observable states of the trend screen.
///
/// `Initial` and `Fetching` show the placeholder; `Loaded` shows the live
/// dataset once it is non-empty; `FetchFailed` keeps the placeholder. The
/// transition to `Fetching` happens exactly once per mount.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenState {
    /// Fetch not yet attempted.
    Initial,
    /// Fetch in flight.
    Fetching,
    /// Fetch succeeded with zero or more samples.
    Loaded,
    /// Fetch failed terminally; only logged, never surfaced.
    FetchFailed,
}

/// Maps a weekday to its fixed short English name.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// Formats raw samples into chart points. Pure and total.
///
/// Order is preserved from the input; values pass through unchanged. Samples
/// falling on the same weekday all appear as separate points with the same
/// label, no aggregation is performed.
pub fn points_from_samples(samples: &[Sample]) -> Vec<ChartPoint> {
    samples
        .iter()
        .map(|sample| ChartPoint {
            label: weekday_label(sample.start_date.weekday()),
            value: sample.value,
        })
        .collect()
}

/// Represents the trend screen state, owning the live dataset.
///
/// Created empty when the screen mounts, replaced wholesale on a successful
/// fetch, discarded on unmount. No cross-session persistence.
#[derive(Debug, Clone)]
pub struct TrendModel {
    /// Observable fetch lifecycle state.
    state: ScreenState,
    /// Live dataset; empty until a fetch succeeded with at least one sample.
    live: Vec<ChartPoint>,
}

impl Default for TrendModel {
    fn default() -> Self {
        Self {
            state: ScreenState::Initial,
            live: Vec::new(),
        }
    }
}

impl TrendModelApi for TrendModel {
    fn screen_state(&self) -> ScreenState {
        self.state
    }

    fn live_dataset(&self) -> &[ChartPoint] {
        &self.live
    }

    fn displayed_dataset(&self) -> &[ChartPoint] {
        if self.live.is_empty() {
            &PLACEHOLDER_DATASET
        } else {
            &self.live
        }
    }
}

#[async_trait]
impl TrendApi for TrendModel {
    async fn begin_fetch(&mut self) -> Result<()> {
        ensure!(
            self.state == ScreenState::Initial,
            "fetch already attempted for this mount"
        );
        self.state = ScreenState::Fetching;
        Ok(())
    }

    async fn complete_fetch(&mut self, points: Vec<ChartPoint>) -> Result<()> {
        self.live = points;
        self.state = ScreenState::Loaded;
        Ok(())
    }

    async fn fail_fetch(&mut self, _error: FetchError) -> Result<()> {
        self.state = ScreenState::FetchFailed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample(ts: time::OffsetDateTime, value: f64) -> Sample {
        Sample {
            value,
            start_date: ts,
        }
    }

    #[test]
    fn formatting_preserves_length_order_and_values() {
        let samples = vec![
            sample(datetime!(2024-01-01 08:00 UTC), 65.0),
            sample(datetime!(2024-01-02 08:00 UTC), 70.5),
            sample(datetime!(2024-01-03 08:00 UTC), 68.2),
        ];
        let points = points_from_samples(&samples);
        assert_eq!(points.len(), samples.len());
        for (point, sample) in points.iter().zip(&samples) {
            assert_eq!(point.value, sample.value);
        }
    }

    #[test]
    fn formatting_empty_input_yields_empty_output() {
        assert!(points_from_samples(&[]).is_empty());
    }

    #[test]
    fn weekday_labels_are_deterministic() {
        // 2024-01-03 is a Wednesday.
        let points = points_from_samples(&[sample(datetime!(2024-01-03 12:00 UTC), 60.0)]);
        assert_eq!(points[0].label, "Wed");
    }

    #[test]
    fn same_weekday_samples_are_all_kept() {
        let samples = vec![
            sample(datetime!(2024-01-01 08:00 UTC), 64.0),
            sample(datetime!(2024-01-01 20:00 UTC), 58.0),
        ];
        let points = points_from_samples(&samples);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Mon");
        assert_eq!(points[1].label, "Mon");
    }

    #[test]
    fn placeholder_is_displayed_until_live_data_arrives() {
        let model = TrendModel::default();
        assert_eq!(model.screen_state(), ScreenState::Initial);
        assert_eq!(model.displayed_dataset(), &PLACEHOLDER_DATASET);
    }

    #[tokio::test]
    async fn empty_live_dataset_never_replaces_placeholder() {
        let mut model = TrendModel::default();
        model.begin_fetch().await.unwrap();
        model.complete_fetch(Vec::new()).await.unwrap();
        assert_eq!(model.screen_state(), ScreenState::Loaded);
        assert!(model.live_dataset().is_empty());
        assert_eq!(model.displayed_dataset(), &PLACEHOLDER_DATASET);
    }

    #[tokio::test]
    async fn live_dataset_replaces_placeholder_when_non_empty() {
        let mut model = TrendModel::default();
        model.begin_fetch().await.unwrap();
        let points = points_from_samples(&[sample(datetime!(2024-01-01 09:30 UTC), 65.0)]);
        model.complete_fetch(points).await.unwrap();
        assert_eq!(model.screen_state(), ScreenState::Loaded);
        assert_eq!(
            model.displayed_dataset(),
            &[ChartPoint {
                label: "Mon",
                value: 65.0
            }]
        );
    }

    #[tokio::test]
    async fn failed_fetch_keeps_placeholder() {
        let mut model = TrendModel::default();
        model.begin_fetch().await.unwrap();
        model.fail_fetch(FetchError::AuthDenied).await.unwrap();
        assert_eq!(model.screen_state(), ScreenState::FetchFailed);
        assert_eq!(model.displayed_dataset(), &PLACEHOLDER_DATASET);
    }

    #[tokio::test]
    async fn fetch_starts_at_most_once_per_mount() {
        let mut model = TrendModel::default();
        model.begin_fetch().await.unwrap();
        assert!(model.begin_fetch().await.is_err());
    }
}
