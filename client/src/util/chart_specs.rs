//! Report → chart dataset projections.
//!
//! These are the only inputs the dashboard passes to the `charts` crate, so
//! every property of the two charts is checked here without a canvas.

#[cfg(test)]
#[path = "chart_specs_test.rs"]
mod chart_specs_test;

use charts::{ChartKind, ChartSpec, Paint, Series};

use super::report_view::ReportSection;
use crate::net::types::AnalysisReport;

/// Label used when the radar chart has no points to show.
pub const RADAR_PLACEHOLDER_LABEL: &str = "N/A";

const SERIES_FILL_ALPHA: f64 = 0.15;
const BAR_FILL_ALPHA: f64 = 0.7;
const BORDER_WIDTH: f64 = 2.0;

/// Strengths vs. weaknesses by ordinal position.
///
/// With `n = max(strong, weak)` the chart has labels `#1..#n`; each series is
/// `1` where that side has an item at the index and `0` otherwise. An empty
/// report yields a single placeholder spoke with both series at zero.
#[must_use]
pub fn radar_spec(report: &AnalysisReport) -> ChartSpec {
    let strong = report.strong_points.len();
    let weak = report.weak_points.len();
    let n = strong.max(weak);

    let (labels, strength, weakness) = if n == 0 {
        (vec![RADAR_PLACEHOLDER_LABEL.to_owned()], vec![0.0], vec![0.0])
    } else {
        (
            (1..=n).map(|i| format!("#{i}")).collect(),
            presence(strong, n),
            presence(weak, n),
        )
    };

    ChartSpec {
        kind: ChartKind::Radar,
        labels,
        series: vec![
            radar_series("Strengths", strength, ReportSection::StrongPoints),
            radar_series("Weaknesses", weakness, ReportSection::WeakPoints),
        ],
        show_legend: true,
    }
}

/// Item count per report section.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_spec(report: &AnalysisReport) -> ChartSpec {
    let values = ReportSection::ALL
        .iter()
        .map(|s| s.items(report).len() as f64)
        .collect();
    let paints = ReportSection::ALL
        .iter()
        .map(|s| Paint { stroke: s.color(), fill: s.color().with_alpha(BAR_FILL_ALPHA) })
        .collect();

    ChartSpec {
        kind: ChartKind::Bar,
        labels: ReportSection::ALL.iter().map(|s| s.bar_label().to_owned()).collect(),
        series: vec![Series { label: "Count".to_owned(), values, paints, border_width: BORDER_WIDTH }],
        show_legend: false,
    }
}

fn presence(len: usize, n: usize) -> Vec<f64> {
    (0..n).map(|i| if i < len { 1.0 } else { 0.0 }).collect()
}

fn radar_series(label: &str, values: Vec<f64>, section: ReportSection) -> Series {
    let color = section.color();
    Series {
        label: label.to_owned(),
        values,
        paints: vec![Paint { stroke: color, fill: color.with_alpha(SERIES_FILL_ALPHA) }],
        border_width: BORDER_WIDTH,
    }
}
