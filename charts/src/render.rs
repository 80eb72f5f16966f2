//! Rendering: paints a [`ChartSpec`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Geometry comes from [`crate::layout`]; this module only strokes and fills.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::chart::Chart`]) maps them to [`crate::ChartError`].

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    ANGLE_LINE_COLOR, AXIS_LABEL_COLOR, BAR_CORNER_RADIUS_PX, GRID_COLOR, LABEL_COLOR, LABEL_FONT, LEGEND_FONT,
    LEGEND_HEIGHT_PX, PLOT_PADDING_PX, RADAR_POINT_RADIUS_PX, RADAR_RINGS,
};
use crate::layout::{self, Point, Rect, RingShape};
use crate::spec::{ChartKind, ChartSpec, Series};

/// Legend swatch edge length.
const SWATCH_PX: f64 = 10.0;

/// Gap between the radar rim and its spoke labels.
const RADAR_LABEL_GAP_PX: f64 = 14.0;

/// Draw the full chart, replacing whatever the surface held.
///
/// `width` and `height` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    if spec.show_legend {
        draw_legend(ctx, &spec.series, width)?;
    }

    match spec.kind {
        ChartKind::Radar => draw_radar(ctx, spec, width, height),
        ChartKind::Bar => draw_bar(ctx, spec, width, height),
    }
}

/// Wipe the surface back to transparent.
///
/// # Errors
///
/// Returns `Err` if the transform cannot be reset.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);
    Ok(())
}

// =============================================================
// Radar
// =============================================================

fn draw_radar(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) -> Result<(), JsValue> {
    let plot = layout::plot_area(width, height, spec.show_legend, false);
    let (center, outer) = layout::radar_frame(plot);
    let radius = (outer - RADAR_LABEL_GAP_PX).max(0.0);
    let count = spec.labels.len();
    let max = layout::axis_max(spec.max_value());

    // Web: rings then spokes.
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(&GRID_COLOR.to_css());
    #[allow(clippy::cast_precision_loss)]
    for ring in 1..=RADAR_RINGS {
        let fraction = ring as f64 / RADAR_RINGS as f64;
        trace_ring(ctx, center, radius, count, fraction)?;
        ctx.stroke();
    }
    ctx.set_stroke_style_str(&ANGLE_LINE_COLOR.to_css());
    for i in 0..count {
        let tip = layout::radar_vertex(center, radius, i, count, 1.0);
        ctx.begin_path();
        ctx.move_to(center.x, center.y);
        ctx.line_to(tip.x, tip.y);
        ctx.stroke();
    }

    // Spoke labels.
    ctx.set_font(LABEL_FONT);
    ctx.set_fill_style_str(&LABEL_COLOR.to_css());
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for (i, label) in spec.labels.iter().enumerate() {
        let at = layout::radar_vertex(center, radius + RADAR_LABEL_GAP_PX * 0.5, i, count, 1.0);
        ctx.fill_text(label, at.x, at.y)?;
    }

    for series in &spec.series {
        draw_radar_series(ctx, series, center, radius, max)?;
    }
    Ok(())
}

fn trace_ring(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    count: usize,
    fraction: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    match layout::radar_ring(center, radius, count, fraction) {
        RingShape::Circle { center, radius } => ctx.arc(center.x, center.y, radius, 0.0, TAU)?,
        RingShape::Polygon(points) => {
            for (i, p) in points.iter().enumerate() {
                if i == 0 {
                    ctx.move_to(p.x, p.y);
                } else {
                    ctx.line_to(p.x, p.y);
                }
            }
            ctx.close_path();
        }
    }
    Ok(())
}

fn draw_radar_series(
    ctx: &CanvasRenderingContext2d,
    series: &Series,
    center: Point,
    radius: f64,
    max: f64,
) -> Result<(), JsValue> {
    let Some(paint) = series.paint_at(0) else {
        return Ok(());
    };
    let points = layout::radar_polygon(center, radius, &series.values, max);
    if points.is_empty() {
        return Ok(());
    }

    ctx.begin_path();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x, p.y);
        } else {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
    ctx.set_fill_style_str(&paint.fill.to_css());
    ctx.fill();
    ctx.set_stroke_style_str(&paint.stroke.to_css());
    ctx.set_line_width(series.border_width.max(1.0));
    ctx.stroke();

    ctx.set_fill_style_str(&paint.stroke.to_css());
    for p in &points {
        ctx.begin_path();
        ctx.arc(p.x, p.y, RADAR_POINT_RADIUS_PX, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

// =============================================================
// Bar
// =============================================================

fn draw_bar(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) -> Result<(), JsValue> {
    let plot = layout::plot_area(width, height, spec.show_legend, true);
    let max = layout::axis_max(spec.max_value());

    // Horizontal grid with value ticks on the left edge.
    ctx.set_line_width(1.0);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for tick in layout::value_ticks(max) {
        let y = layout::value_to_y(plot, tick, max);
        ctx.set_stroke_style_str(&GRID_COLOR.to_css());
        ctx.begin_path();
        ctx.move_to(plot.x, y);
        ctx.line_to(plot.right(), y);
        ctx.stroke();
        ctx.set_fill_style_str(&AXIS_LABEL_COLOR.to_css());
        ctx.fill_text(&format!("{tick:.0}"), plot.x - 6.0, y)?;
    }

    // Bars, one series after another sharing slots.
    for series in &spec.series {
        let rects = layout::bar_rects(plot, &series.values, max);
        for (i, rect) in rects.iter().enumerate() {
            let Some(paint) = series.paint_at(i) else {
                continue;
            };
            if rect.h <= 0.0 {
                continue;
            }
            trace_rounded_top(ctx, *rect, BAR_CORNER_RADIUS_PX)?;
            ctx.set_fill_style_str(&paint.fill.to_css());
            ctx.fill();
            ctx.set_stroke_style_str(&paint.stroke.to_css());
            ctx.set_line_width(series.border_width.max(1.0));
            ctx.stroke();
        }
    }

    // Category labels under each slot.
    ctx.set_fill_style_str(&AXIS_LABEL_COLOR.to_css());
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    let count = spec.labels.len();
    for (i, label) in spec.labels.iter().enumerate() {
        let x = layout::bar_slot_center(plot, i, count);
        ctx.fill_text(label, x, plot.bottom() + 6.0)?;
    }
    Ok(())
}

fn trace_rounded_top(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.w * 0.5).min(rect.h);
    ctx.begin_path();
    ctx.move_to(rect.x, rect.bottom());
    ctx.line_to(rect.x, rect.y + r);
    ctx.arc_to(rect.x, rect.y, rect.x + r, rect.y, r)?;
    ctx.line_to(rect.right() - r, rect.y);
    ctx.arc_to(rect.right(), rect.y, rect.right(), rect.y + r, r)?;
    ctx.line_to(rect.right(), rect.bottom());
    ctx.close_path();
    Ok(())
}

// =============================================================
// Legend
// =============================================================

fn draw_legend(ctx: &CanvasRenderingContext2d, series: &[Series], width: f64) -> Result<(), JsValue> {
    ctx.set_font(LEGEND_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    let widths = series
        .iter()
        .map(|s| Ok(SWATCH_PX + 6.0 + ctx.measure_text(&s.label)?.width()))
        .collect::<Result<Vec<f64>, JsValue>>()?;
    let gap = 16.0;
    #[allow(clippy::cast_precision_loss)]
    let total = widths.iter().sum::<f64>() + gap * (widths.len().saturating_sub(1)) as f64;
    let mut x = ((width - total) * 0.5).max(PLOT_PADDING_PX);
    let y = PLOT_PADDING_PX * 0.5 + LEGEND_HEIGHT_PX * 0.5;

    for (s, w) in series.iter().zip(widths) {
        if let Some(paint) = s.paint_at(0) {
            ctx.set_fill_style_str(&paint.fill.to_css());
            ctx.fill_rect(x, y - SWATCH_PX * 0.5, SWATCH_PX, SWATCH_PX);
            ctx.set_stroke_style_str(&paint.stroke.to_css());
            ctx.set_line_width(1.0);
            ctx.stroke_rect(x, y - SWATCH_PX * 0.5, SWATCH_PX, SWATCH_PX);
        }
        ctx.set_fill_style_str(&LABEL_COLOR.to_css());
        ctx.fill_text(&s.label, x + SWATCH_PX + 6.0, y)?;
        x += w + gap;
    }
    Ok(())
}
