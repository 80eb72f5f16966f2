#![allow(clippy::float_cmp)]

use super::*;

fn items(n: usize, prefix: &str) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

fn report(strong: usize, weak: usize, suggestions: usize, moves: usize) -> AnalysisReport {
    AnalysisReport {
        situation: "s".to_owned(),
        strong_points: items(strong, "s"),
        weak_points: items(weak, "w"),
        suggestions: items(suggestions, "g"),
        next_moves: items(moves, "m"),
    }
}

// =============================================================
// Radar
// =============================================================

#[test]
fn radar_for_example_report() {
    let spec = radar_spec(&report(2, 1, 0, 3));
    assert_eq!(spec.kind, ChartKind::Radar);
    assert_eq!(spec.labels, vec!["#1", "#2"]);
    assert_eq!(spec.series[0].label, "Strengths");
    assert_eq!(spec.series[0].values, vec![1.0, 1.0]);
    assert_eq!(spec.series[1].label, "Weaknesses");
    assert_eq!(spec.series[1].values, vec![1.0, 0.0]);
}

#[test]
fn radar_empty_report_has_single_placeholder() {
    let spec = radar_spec(&AnalysisReport::default());
    assert_eq!(spec.labels, vec![RADAR_PLACEHOLDER_LABEL]);
    assert_eq!(spec.series[0].values, vec![0.0]);
    assert_eq!(spec.series[1].values, vec![0.0]);
}

#[test]
fn radar_label_count_is_max_of_strong_and_weak() {
    for strong in 0..6 {
        for weak in 0..6 {
            let spec = radar_spec(&report(strong, weak, 2, 2));
            assert_eq!(spec.labels.len(), strong.max(weak).max(1));
            assert!(spec.validate().is_ok());
        }
    }
}

#[test]
fn radar_weak_longer_than_strong() {
    let spec = radar_spec(&report(1, 3, 0, 0));
    assert_eq!(spec.labels, vec!["#1", "#2", "#3"]);
    assert_eq!(spec.series[0].values, vec![1.0, 0.0, 0.0]);
    assert_eq!(spec.series[1].values, vec![1.0, 1.0, 1.0]);
}

#[test]
fn radar_ignores_suggestions_and_moves() {
    assert_eq!(radar_spec(&report(1, 1, 9, 9)).labels.len(), 1);
}

#[test]
fn radar_shows_legend() {
    assert!(radar_spec(&report(1, 1, 0, 0)).show_legend);
}

// =============================================================
// Bar
// =============================================================

#[test]
fn bar_for_example_report() {
    let spec = bar_spec(&report(2, 1, 0, 3));
    assert_eq!(spec.kind, ChartKind::Bar);
    assert_eq!(spec.labels, vec!["Strong Points", "Weak Points", "Suggestions", "Moves"]);
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].values, vec![2.0, 1.0, 0.0, 3.0]);
}

#[test]
fn bar_empty_report_has_four_zero_bars() {
    let spec = bar_spec(&AnalysisReport::default());
    assert_eq!(spec.series[0].values, vec![0.0; 4]);
    assert!(spec.validate().is_ok());
}

#[test]
fn bar_has_one_paint_per_category() {
    let spec = bar_spec(&report(1, 1, 1, 1));
    let series = &spec.series[0];
    assert_eq!(series.paints.len(), 4);
    assert_eq!(series.paint_at(0).map(|p| p.stroke), Some(ReportSection::StrongPoints.color()));
    assert_eq!(series.paint_at(3).map(|p| p.stroke), Some(ReportSection::NextMoves.color()));
}
