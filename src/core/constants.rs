use crate::model::trend::ChartPoint;
use time::Duration;

/// Fallback week shown whenever no live data is available. Never reassigned.
pub const PLACEHOLDER_DATASET: [ChartPoint; 7] = [
    ChartPoint {
        label: "Mon",
        value: 72.0,
    },
    ChartPoint {
        label: "Tue",
        value: 75.0,
    },
    ChartPoint {
        label: "Wed",
        value: 70.0,
    },
    ChartPoint {
        label: "Thu",
        value: 68.0,
    },
    ChartPoint {
        label: "Fri",
        value: 74.0,
    },
    ChartPoint {
        label: "Sat",
        value: 73.0,
    },
    ChartPoint {
        label: "Sun",
        value: 71.0,
    },
];

/// Calendar length of the requested sample window.
pub const TREND_WINDOW: Duration = Duration::days(7);

/// Default endpoint of the fitness data provider.
#[allow(dead_code)]
pub const DEFAULT_PROVIDER_URL: &str = "https://fit.example.com/api/v1";

/// Fixed chart height in points.
pub const CHART_HEIGHT: f32 = 200.0;
/// Horizontal margin subtracted from the available width.
pub const CHART_MARGIN: f32 = 32.0;
/// Stroke width of the trend line.
pub const CHART_STROKE_WIDTH: f32 = 2.0;
/// Font size of the axis tick labels.
pub const TICK_LABEL_FONT_SIZE: f32 = 10.0;
/// Interpolated curve points per segment between two samples.
pub const CURVE_POINTS_PER_SEGMENT: usize = 16;
