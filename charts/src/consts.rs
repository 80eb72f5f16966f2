//! Shared numeric and color constants for the charts crate.

use crate::spec::Rgba;

// ── Plot frame ──────────────────────────────────────────────────

/// Inner padding between the canvas edge and the plot area, in CSS pixels.
pub const PLOT_PADDING_PX: f64 = 28.0;

/// Vertical space reserved above the plot for the legend, in CSS pixels.
pub const LEGEND_HEIGHT_PX: f64 = 24.0;

/// Vertical space reserved below a bar plot for category labels.
pub const BAR_LABEL_HEIGHT_PX: f64 = 22.0;

/// Fraction of each bar slot occupied by the bar itself.
pub const BAR_FILL_RATIO: f64 = 0.6;

/// Corner radius for bars, in CSS pixels.
pub const BAR_CORNER_RADIUS_PX: f64 = 8.0;

/// Number of concentric rings drawn on the radar grid.
pub const RADAR_RINGS: usize = 4;

/// Radius of the point markers on radar series.
pub const RADAR_POINT_RADIUS_PX: f64 = 3.0;

// ── Text ────────────────────────────────────────────────────────

pub const LABEL_FONT: &str = "11px system-ui, sans-serif";
pub const LEGEND_FONT: &str = "12px system-ui, sans-serif";

// ── Colors ──────────────────────────────────────────────────────

pub const LABEL_COLOR: Rgba = Rgba::rgb(0x94, 0xa3, 0xb8);
pub const AXIS_LABEL_COLOR: Rgba = Rgba::rgb(0x64, 0x74, 0x8b);
pub const GRID_COLOR: Rgba = Rgba::new(255, 255, 255, 0.08);
pub const ANGLE_LINE_COLOR: Rgba = Rgba::new(255, 255, 255, 0.06);
