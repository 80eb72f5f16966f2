//! Dataset description accepted by [`crate::chart::Chart`].
//!
//! A spec is plain data: it can be built, compared, and validated without a
//! browser. Painting happens only in [`crate::render`].

#[cfg(test)]
#[path = "spec_test.rs"]
mod spec_test;

use serde::{Deserialize, Serialize};

use crate::chart::ChartError;

/// Which chart to paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Radar,
    Bar,
}

/// An sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// CSS color string usable as a canvas fill or stroke style.
    #[must_use]
    pub fn to_css(self) -> String {
        if (self.a - 1.0).abs() < f64::EPSILON {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Stroke and fill pair for a series or a single data point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub stroke: Rgba,
    pub fill: Rgba,
}

/// One named row of values aligned with the chart labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    /// One paint for the whole series, or one per data point.
    pub paints: Vec<Paint>,
    pub border_width: f64,
}

impl Series {
    /// Paint for data point `index`, cycling when fewer paints than points.
    #[must_use]
    pub fn paint_at(&self, index: usize) -> Option<Paint> {
        if self.paints.is_empty() {
            return None;
        }
        self.paints.get(index % self.paints.len()).copied()
    }
}

/// Complete description of one chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub show_legend: bool,
}

impl ChartSpec {
    /// Check that every series lines up with the labels and can be painted.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptyLabels`] when there is nothing to plot,
    /// [`ChartError::SeriesLength`] when a series does not have one value per
    /// label, and [`ChartError::MissingPaint`] when a series has no paint.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.labels.is_empty() {
            return Err(ChartError::EmptyLabels);
        }
        for series in &self.series {
            if series.values.len() != self.labels.len() {
                return Err(ChartError::SeriesLength {
                    series: series.label.clone(),
                    expected: self.labels.len(),
                    actual: series.values.len(),
                });
            }
            if series.paints.is_empty() {
                return Err(ChartError::MissingPaint { series: series.label.clone() });
            }
        }
        Ok(())
    }

    /// Largest value across all series, or `0.0` when there are none.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}
