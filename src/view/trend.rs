//! Trend View
//!
//! This module provides the view layer for the heart rate trend screen: one
//! scrollable panel with a heading and a labeled card containing the weekly
//! line chart.

use eframe::egui;
use egui::RichText;
use egui_plot::{Line, Plot};

use crate::{
    api::{
        model::{ModelHandle, TrendModelApi},
        view::ViewApi,
    },
    core::constants::{
        CHART_HEIGHT, CHART_MARGIN, CHART_STROKE_WIDTH, CURVE_POINTS_PER_SEGMENT,
        TICK_LABEL_FONT_SIZE,
    },
    math::interpolate::sample_monotone_curve,
    model::trend::ChartPoint,
};

/// Renders the weekly trend line chart into the current card.
///
/// The independent axis carries the weekday labels in dataset order; the
/// dependent axis carries the BPM values. The curve is monotone-interpolated
/// between the points.
fn render_trend_chart(ui: &mut egui::Ui, points: &[ChartPoint]) {
    let labels: Vec<&'static str> = points.iter().map(|p| p.label).collect();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let curve = sample_monotone_curve(&values, CURVE_POINTS_PER_SEGMENT);

    let width = (ui.available_width() - CHART_MARGIN).max(0.0);
    ui.scope(|ui| {
        // Small tick labels, as on the axis styling of the card.
        for style in [egui::TextStyle::Body, egui::TextStyle::Small] {
            if let Some(font) = ui.style_mut().text_styles.get_mut(&style) {
                font.size = TICK_LABEL_FONT_SIZE;
            }
        }
        Plot::new("hr trend")
            .width(width)
            .height(CHART_HEIGHT)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < labels.len() {
                    labels[idx as usize].to_string()
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(curve).width(CHART_STROKE_WIDTH));
            });
    });
}

/// `TrendView` structure.
///
/// Represents the screen displaying the resting heart rate trend for the
/// last seven days.
pub struct TrendView {
    /// Shared read access to the trend screen state.
    model: ModelHandle<dyn TrendModelApi>,
}

impl TrendView {
    /// Creates a new `TrendView` instance.
    ///
    /// # Arguments
    /// * `model` - Shared read access to the trend screen state.
    ///
    /// # Returns
    /// A new `TrendView` instance.
    pub fn new(model: ModelHandle<dyn TrendModelApi>) -> Self {
        Self { model }
    }
}

impl ViewApi for TrendView {
    /// Renders the complete trend screen.
    ///
    /// Loading, failed and empty fetches all render the placeholder dataset;
    /// the displayed content does not distinguish them.
    ///
    /// # Arguments
    /// * `ctx` - The egui context for rendering the UI.
    ///
    /// # Returns
    /// A result indicating success or failure.
    fn render(&mut self, ctx: &egui::Context) -> Result<(), String> {
        let model = self.model.blocking_read();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Your Metrics");
                ui.add_space(8.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new("Resting Heart Rate (7d)").strong());
                    ui.add_space(4.0);
                    render_trend_chart(ui, model.displayed_dataset());
                });
            });
        });
        Ok(())
    }
}
