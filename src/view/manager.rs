//! View Manager
//!
//! This module coordinates the active view of the application. View state
//! updates arrive on a broadcast channel from the application controller and
//! replace the rendered view.

use std::sync::Arc;

use eframe::App;
use log::error;
use tokio::{
    sync::{broadcast::Receiver, RwLock},
    task::JoinHandle,
};

use crate::api::{
    model::{ModelHandle, TrendModelApi},
    view::ViewApi,
};

use super::trend::TrendView;

/// View states the controller can publish.
#[derive(Clone, Debug)]
pub enum ViewState {
    /// The heart rate trend screen.
    Trend(ModelHandle<dyn TrendModelApi>),
}

enum View {
    NoView,
    Trend(TrendView),
}

impl ViewApi for View {
    fn render(&mut self, ctx: &egui::Context) -> Result<(), String> {
        match self {
            Self::Trend(v) => v.render(ctx),
            Self::NoView => Ok(()),
        }
    }
}

impl From<ViewState> for View {
    fn from(val: ViewState) -> Self {
        match val {
            ViewState::Trend(model) => View::Trend(TrendView::new(model)),
        }
    }
}

pub struct ViewManager {
    active_view: Arc<RwLock<View>>,
    _task_handle: JoinHandle<()>,
}

impl ViewManager {
    pub fn new(mut v_rx: Receiver<ViewState>) -> Self {
        let active_view = Arc::new(RwLock::new(View::NoView));
        let task_view = active_view.clone();
        let _task_handle = tokio::spawn(async move {
            while let Ok(s) = v_rx.recv().await {
                *task_view.write().await = s.into();
            }
        });

        Self {
            active_view,
            _task_handle,
        }
    }
}

impl App for ViewManager {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_pixels_per_point(1.5);
        if let Err(e) = self.active_view.blocking_write().render(ctx) {
            error!("view failed to render: {}", e)
        }
    }
}
