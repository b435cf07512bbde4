//! Application Controller
//!
//! This module defines the main controller responsible for orchestrating the
//! application. It spawns the one-shot weekly fetch when the screen mounts
//! and applies the resulting events to the trend model.

use crate::{
    api::{
        controller::{HeartRateSourceApi, TrendApi},
        model::{ModelHandle, TrendModelApi},
    },
    core::events::AppEvent,
    model::trend::points_from_samples,
    view::manager::{ViewManager, ViewState},
};

use anyhow::Result;
use log::{error, trace};
use std::sync::Arc;
use tokio::sync::{broadcast::Sender, RwLock};

/// Main application controller.
///
/// This structure owns the data source for the one-shot fetch, the trend
/// model, and the event bus connecting the two.
pub struct AppController<
    SRC: HeartRateSourceApi + Send + 'static,
    TMT: TrendApi + Send + Sync + 'static,
> {
    view_tx: Sender<ViewState>,
    event_bus: Sender<AppEvent>,
    trend_model: Arc<RwLock<TMT>>,
    /// Consumed by the one-shot fetch; `None` once the fetch was spawned.
    source: Option<SRC>,
}

impl<SRC: HeartRateSourceApi + Send + 'static, TMT: TrendApi + Send + Sync + 'static>
    AppController<SRC, TMT>
{
    /// Creates a new `AppController`.
    ///
    /// # Arguments
    /// - `source`: The weekly heart rate data source.
    /// - `trend_model`: The shared trend screen model.
    /// - `event_bus`: The event bus for broadcasting application events.
    ///
    /// # Returns
    /// A new `AppController` instance.
    pub fn new(source: SRC, trend_model: Arc<RwLock<TMT>>, event_bus: Sender<AppEvent>) -> Self {
        trace!("Initializing AppController.");
        let (vtx, _) = tokio::sync::broadcast::channel(16);
        Self {
            view_tx: vtx,
            event_bus,
            trend_model,
            source: Some(source),
        }
    }

    /// Returns the view manager.
    ///
    /// # Returns
    /// A `ViewManager` instance.
    pub fn get_viewmanager(&self) -> ViewManager {
        ViewManager::new(self.view_tx.subscribe())
    }

    fn send_initial_view(&self) -> Result<()> {
        let handle: ModelHandle<dyn TrendModelApi> = self.trend_model.clone();
        self.view_tx.send(ViewState::Trend(handle))?;
        Ok(())
    }

    /// Spawns the one-shot fetch task for this mount.
    ///
    /// The task publishes its outcome onto the event bus. When the bus has
    /// no receivers anymore the application is shutting down and the result
    /// is dropped instead of written into dead state.
    fn spawn_fetch(&mut self) {
        let Some(mut source) = self.source.take() else {
            trace!("fetch already spawned for this mount");
            return;
        };
        let bus = self.event_bus.clone();
        tokio::spawn(async move {
            let _ = bus.send(AppEvent::FetchStarted);
            let event = match source.fetch_weekly_heart_rate().await {
                Ok(samples) => AppEvent::SamplesArrived(samples),
                Err(e) => AppEvent::FetchFailed(e),
            };
            if bus.send(event).is_err() {
                trace!("event bus closed before fetch completion");
            }
        });
    }

    /// Applies an application-level event to the trend model.
    async fn dispatch_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::FetchStarted => self.trend_model.write().await.begin_fetch().await,
            AppEvent::SamplesArrived(samples) => {
                let points = points_from_samples(&samples);
                self.trend_model.write().await.complete_fetch(points).await
            }
            AppEvent::FetchFailed(e) => {
                error!("weekly heart rate fetch failed: {}", e);
                self.trend_model.write().await.fail_fetch(e).await
            }
        }
    }

    /// Asynchronous event handler.
    ///
    /// Publishes the initial view state, spawns the one-shot fetch and then
    /// processes application-level events until the bus closes.
    ///
    /// # Arguments
    /// - `gui_ctx`: The GUI context.
    pub async fn event_handler(mut self, gui_ctx: egui::Context) {
        let mut event_rx = self.event_bus.subscribe();
        while let Err(e) = self.send_initial_view() {
            error!(
                "could not send initial viewstate, trying again in 5 sec: {}",
                e
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
        }
        self.spawn_fetch();
        while let Ok(event) = event_rx.recv().await {
            if let Err(e) = self.dispatch_event(event).await {
                error!("error during event handling: {}", e);
            }
            gui_ctx.request_repaint();
        }
    }
}
