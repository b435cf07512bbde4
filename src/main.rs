//! Resting Heart Rate Trend Viewer
//!
//! This tool displays a user's resting heart rate trend over the last seven
//! days as a line chart. The samples are fetched once at startup from an
//! external fitness data provider; a fixed placeholder week is shown until
//! live data arrives (and whenever it does not).

use components::application::AppController;
use components::provider::DesktopPermissions;
use components::source::HeartRateSource;
use eframe::NativeOptions;
use env_logger::Env;
use model::trend::TrendModel;

#[cfg(feature = "mock")]
use components::provider::MockFitnessClient;
#[cfg(not(feature = "mock"))]
use components::provider::RestFitnessClient;
#[cfg(not(feature = "mock"))]
use crate::core::constants::DEFAULT_PROVIDER_URL;

use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

/// Public interfaces between models, controllers and views.
mod api {
    /// Mutating and asynchronous controller traits.
    pub mod controller;
    /// Read-only model traits.
    pub mod model;
    /// Trait definitions for views.
    pub mod view;
}

/// Core utilities used throughout the application.
mod core {
    /// Application-wide constants.
    pub mod constants;
    /// Event system for inter-module communication.
    pub mod events;
}

/// Mathematical utilities for chart preparation.
mod math {
    /// Monotone cubic interpolation for smooth chart curves.
    pub mod interpolate;
}

/// Data models representing the application's domain.
mod model {
    /// Types at the fitness provider boundary.
    pub mod provider;
    /// The heart rate trend screen state and sample formatting.
    pub mod trend;
}

/// Controllers managing the application's logic.
mod components {
    /// Entry point controller orchestrating the fetch-then-render pipeline.
    pub mod application;
    /// Concrete fitness provider clients.
    pub mod provider;
    /// The weekly heart rate data source adapter.
    pub mod source;
}

/// UI-related components for the application.
mod view {
    /// View manager for coordinating the active view.
    pub mod manager;
    /// The heart rate trend screen.
    pub mod trend;
}

/// Main entry point of the application.
///
/// Initializes logging, sets up the asynchronous runtime, and starts the
/// application with the eframe framework.
fn main() {
    // Initialize logger with environment-specific settings.
    env_logger::Builder::from_env(
        Env::default()
            .filter_or("MY_LOG_LEVEL", "info")
            .write_style_or("MY_LOG_STYLE", "always"),
    )
    .init();

    // Create a new Tokio runtime for asynchronous operations.
    let rt = Runtime::new().expect("Unable to create Runtime");
    let _enter = rt.enter();

    // Event bus connecting the one-shot fetch task to the controller.
    let (event_bus, _) = tokio::sync::broadcast::channel(16);

    // Shared state for the trend screen.
    let trend_model = Arc::new(RwLock::new(TrendModel::default()));

    #[cfg(feature = "mock")]
    let provider = MockFitnessClient::default();
    #[cfg(not(feature = "mock"))]
    let provider = RestFitnessClient::new(DEFAULT_PROVIDER_URL);

    let source = HeartRateSource::new(DesktopPermissions, provider);
    let app_controller = AppController::new(source, trend_model, event_bus);

    // Start the eframe application with the main view manager.
    eframe::run_native(
        "Hrtrend-rs",
        NativeOptions::default(),
        Box::new(|cc| {
            let view_manager = app_controller.get_viewmanager();
            tokio::spawn(app_controller.event_handler(cc.egui_ctx.clone()));
            Ok(Box::new(view_manager))
        }),
    )
    .expect("Failed to start eframe application");
}
