#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- axis_max ---

#[test]
fn axis_max_is_at_least_one() {
    assert_eq!(axis_max(0.0), 1.0);
    assert_eq!(axis_max(-3.0), 1.0);
}

#[test]
fn axis_max_rounds_up() {
    assert_eq!(axis_max(2.2), 3.0);
    assert_eq!(axis_max(4.0), 4.0);
}

#[test]
fn axis_max_ignores_non_finite() {
    assert_eq!(axis_max(f64::NAN), 1.0);
    assert_eq!(axis_max(f64::INFINITY), 1.0);
}

// --- plot_area ---

#[test]
fn plot_area_reserves_legend_band() {
    let plain = plot_area(400.0, 300.0, false, false);
    let with_legend = plot_area(400.0, 300.0, true, false);
    assert_eq!(with_legend.y - plain.y, LEGEND_HEIGHT_PX);
    assert_eq!(plain.h - with_legend.h, LEGEND_HEIGHT_PX);
}

#[test]
fn plot_area_never_negative() {
    let r = plot_area(10.0, 10.0, true, true);
    assert_eq!(r.w, 0.0);
    assert_eq!(r.h, 0.0);
}

// --- radar ---

#[test]
fn radar_vertex_zero_points_up() {
    let p = radar_vertex(Point::new(100.0, 100.0), 50.0, 0, 4, 1.0);
    assert!(approx_eq(p.x, 100.0));
    assert!(approx_eq(p.y, 50.0));
}

#[test]
fn radar_vertex_advances_clockwise() {
    let p = radar_vertex(Point::new(100.0, 100.0), 50.0, 1, 4, 1.0);
    assert!(approx_eq(p.x, 150.0));
    assert!(approx_eq(p.y, 100.0));
}

#[test]
fn radar_vertices_lie_on_circle() {
    let center = Point::new(0.0, 0.0);
    for i in 0..7 {
        let p = radar_vertex(center, 10.0, i, 7, 1.0);
        assert!(approx_eq(p.x.hypot(p.y), 10.0));
    }
}

#[test]
fn radar_ring_single_spoke_is_circle() {
    let center = Point::new(10.0, 10.0);
    assert_eq!(radar_ring(center, 40.0, 1, 0.5), RingShape::Circle { center, radius: 20.0 });
}

#[test]
fn radar_ring_with_three_spokes_is_polygon_on_fraction() {
    let center = Point::new(0.0, 0.0);
    let RingShape::Polygon(points) = radar_ring(center, 40.0, 3, 0.25) else {
        panic!("expected polygon ring");
    };
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| approx_eq(p.x.hypot(p.y), 10.0)));
}

#[test]
fn radar_polygon_zero_values_collapse_to_center() {
    let center = Point::new(5.0, 5.0);
    let poly = radar_polygon(center, 20.0, &[0.0, 0.0, 0.0], 1.0);
    assert_eq!(poly.len(), 3);
    for p in poly {
        assert!(approx_eq(p.x, 5.0) && approx_eq(p.y, 5.0));
    }
}

#[test]
fn radar_polygon_clamps_over_max() {
    let center = Point::new(0.0, 0.0);
    let poly = radar_polygon(center, 10.0, &[5.0], 1.0);
    assert!(approx_eq(poly[0].x.hypot(poly[0].y), 10.0));
}

#[test]
fn radar_frame_uses_shorter_side() {
    let (center, radius) = radar_frame(Rect::new(0.0, 0.0, 200.0, 100.0));
    assert_eq!(center, Point::new(100.0, 50.0));
    assert_eq!(radius, 50.0);
}

// --- bars ---

#[test]
fn bar_rects_fit_inside_plot() {
    let plot = Rect::new(10.0, 10.0, 400.0, 200.0);
    let rects = bar_rects(plot, &[2.0, 1.0, 0.0, 3.0], 3.0);
    assert_eq!(rects.len(), 4);
    for r in &rects {
        assert!(plot.contains_rect(r), "{r:?} escapes {plot:?}");
    }
}

#[test]
fn bar_rects_heights_scale_with_values() {
    let plot = Rect::new(0.0, 0.0, 400.0, 300.0);
    let rects = bar_rects(plot, &[3.0, 0.0, 1.5], 3.0);
    assert!(approx_eq(rects[0].h, 300.0));
    assert!(approx_eq(rects[1].h, 0.0));
    assert!(approx_eq(rects[2].h, 150.0));
    assert!(rects.iter().all(|r| approx_eq(r.bottom(), plot.bottom())));
}

#[test]
fn bar_rects_empty_values() {
    assert!(bar_rects(Rect::new(0.0, 0.0, 10.0, 10.0), &[], 1.0).is_empty());
}

#[test]
fn bar_slot_center_matches_rect_center() {
    let plot = Rect::new(0.0, 0.0, 400.0, 100.0);
    let rects = bar_rects(plot, &[1.0, 1.0, 1.0, 1.0], 1.0);
    for (i, r) in rects.iter().enumerate() {
        assert!(approx_eq(r.x + r.w * 0.5, bar_slot_center(plot, i, 4)));
    }
}

// --- ticks ---

#[test]
fn value_ticks_small_max_steps_by_one() {
    assert_eq!(value_ticks(3.0), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn value_ticks_zero_max_still_has_axis() {
    assert_eq!(value_ticks(0.0), vec![0.0, 1.0]);
}

#[test]
fn value_ticks_large_max_coarsens_step() {
    let ticks = value_ticks(25.0);
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks[1], 5.0);
    assert!(ticks.iter().all(|t| *t <= 25.0));
}

#[test]
fn value_to_y_maps_extremes() {
    let plot = Rect::new(0.0, 20.0, 100.0, 200.0);
    assert!(approx_eq(value_to_y(plot, 0.0, 4.0), 220.0));
    assert!(approx_eq(value_to_y(plot, 4.0, 4.0), 20.0));
}
