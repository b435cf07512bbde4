//! Core View Trait
//!
//! This module defines the `ViewApi` trait, which is implemented by all views
//! in the application. It provides a standardized interface for rendering.

/// Trait defining the interface for application views.
///
/// This trait ensures that all views implement methods for rendering.
pub trait ViewApi: Send {
    /// Renders the view.
    ///
    /// # Arguments
    /// * `ctx` - The `egui::Context` for rendering the UI.
    ///
    /// # Returns
    /// A result indicating success or failure.
    fn render(&mut self, ctx: &egui::Context) -> Result<(), String>;
}
