//! Pure chart geometry in CSS pixels.
//!
//! Nothing here touches the DOM, so every placement decision made by
//! [`crate::render`] can be tested natively.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::consts::{BAR_FILL_RATIO, BAR_LABEL_HEIGHT_PX, LEGEND_HEIGHT_PX, PLOT_PADDING_PX};

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Whether `other` lies entirely inside `self` (edges inclusive).
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        const SLOP: f64 = 1e-9;
        other.x >= self.x - SLOP
            && other.y >= self.y - SLOP
            && other.right() <= self.right() + SLOP
            && other.bottom() <= self.bottom() + SLOP
    }
}

/// Top of the value axis: the largest value rounded up, never below 1.
///
/// Counts are integers, so a whole-number axis keeps ticks on item counts.
#[must_use]
pub fn axis_max(max_value: f64) -> f64 {
    if max_value.is_finite() { max_value.ceil().max(1.0) } else { 1.0 }
}

/// Region available for the plot after padding, legend and label bands.
#[must_use]
pub fn plot_area(width: f64, height: f64, legend: bool, bottom_labels: bool) -> Rect {
    let top = PLOT_PADDING_PX + if legend { LEGEND_HEIGHT_PX } else { 0.0 };
    let bottom = PLOT_PADDING_PX + if bottom_labels { BAR_LABEL_HEIGHT_PX } else { 0.0 };
    let w = (width - 2.0 * PLOT_PADDING_PX).max(0.0);
    let h = (height - top - bottom).max(0.0);
    Rect::new(PLOT_PADDING_PX, top, w, h)
}

/// Center and outer radius of the radar web inside `plot`.
#[must_use]
pub fn radar_frame(plot: Rect) -> (Point, f64) {
    (plot.center(), (plot.w.min(plot.h) * 0.5).max(0.0))
}

/// Position of spoke `index` of `count` at `fraction` of the radius.
///
/// Spoke 0 points straight up; spokes advance clockwise.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn radar_vertex(center: Point, radius: f64, index: usize, count: usize, fraction: f64) -> Point {
    let count = count.max(1);
    let angle = -FRAC_PI_2 + TAU * (index as f64) / (count as f64);
    let r = radius * fraction;
    Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
}

/// Outline of one radar grid ring.
#[derive(Debug, Clone, PartialEq)]
pub enum RingShape {
    /// Fewer than three spokes cannot enclose a polygon.
    Circle { center: Point, radius: f64 },
    Polygon(Vec<Point>),
}

/// Ring at `fraction` of `radius` for a web with `count` spokes.
#[must_use]
pub fn radar_ring(center: Point, radius: f64, count: usize, fraction: f64) -> RingShape {
    if count < 3 {
        return RingShape::Circle { center, radius: radius * fraction };
    }
    RingShape::Polygon((0..count).map(|i| radar_vertex(center, radius, i, count, fraction)).collect())
}

/// Polygon vertices for one radar series scaled against `max`.
#[must_use]
pub fn radar_polygon(center: Point, radius: f64, values: &[f64], max: f64) -> Vec<Point> {
    let max = if max > 0.0 { max } else { 1.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| radar_vertex(center, radius, i, values.len(), (v / max).clamp(0.0, 1.0)))
        .collect()
}

/// One rectangle per value, evenly spaced along the bottom of `plot`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_rects(plot: Rect, values: &[f64], max: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = if max > 0.0 { max } else { 1.0 };
    let slot = plot.w / values.len() as f64;
    let bar_w = slot * BAR_FILL_RATIO;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = plot.h * (v / max).clamp(0.0, 1.0);
            let x = plot.x + slot * i as f64 + (slot - bar_w) * 0.5;
            Rect::new(x, plot.bottom() - h, bar_w, h)
        })
        .collect()
}

/// Horizontal center of bar slot `index` of `count`, for category labels.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_slot_center(plot: Rect, index: usize, count: usize) -> f64 {
    let slot = plot.w / count.max(1) as f64;
    plot.x + slot * (index as f64 + 0.5)
}

/// Value-axis tick marks from zero to `max`, stepping by whole numbers.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn value_ticks(max: f64) -> Vec<f64> {
    let max = axis_max(max);
    let step = if max <= 10.0 { 1.0 } else { (max / 5.0).ceil() };
    let count = (max / step).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Canvas y coordinate for `value` on the bar plot's value axis.
#[must_use]
pub fn value_to_y(plot: Rect, value: f64, max: f64) -> f64 {
    let max = if max > 0.0 { max } else { 1.0 };
    plot.bottom() - plot.h * (value / max).clamp(0.0, 1.0)
}
