//! Destroyable chart handle bound to one canvas.
//!
//! A [`Chart`] owns the pixels of its canvas from construction until
//! [`Chart::destroy`]. Two handles on one canvas would paint over each other,
//! so callers that reuse a surface must destroy the old handle first.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render;
use crate::spec::{ChartKind, ChartSpec};

/// Errors raised while validating or painting a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The spec has no labels, so there is nothing to plot.
    #[error("chart has no labels")]
    EmptyLabels,

    /// A series does not carry exactly one value per label.
    #[error("series {series} has {actual} values, expected {expected}")]
    SeriesLength { series: String, expected: usize, actual: usize },

    /// A series has no stroke/fill paint.
    #[error("series {series} has no paint")]
    MissingPaint { series: String },

    /// The canvas could not provide a 2D context or a draw call failed.
    #[error("chart surface error: {0}")]
    Surface(String),
}

impl From<JsValue> for ChartError {
    fn from(value: JsValue) -> Self {
        Self::Surface(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// A chart painted onto a canvas.
pub struct Chart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    spec: ChartSpec,
    width: f64,
    height: f64,
}

impl Chart {
    /// Validate `spec`, size the canvas backing store, and paint.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`ChartSpec::validate`], or
    /// [`ChartError::Surface`] when the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, spec: ChartSpec) -> Result<Self, ChartError> {
        spec.validate()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| ChartError::Surface("2d context unavailable".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::Surface("context is not 2d".to_owned()))?;

        let width = f64::from(canvas.client_width().max(1));
        let height = f64::from(canvas.client_height().max(1));
        let mut chart = Self { canvas, ctx, spec, width, height };
        chart.redraw()?;
        Ok(chart)
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.spec.kind
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Repaint the current spec, e.g. after the canvas changed size.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Surface`] if a draw call fails.
    pub fn redraw(&mut self) -> Result<(), ChartError> {
        self.resize();
        render::draw(&self.ctx, &self.spec, self.width, self.height, device_pixel_ratio())?;
        Ok(())
    }

    /// Release the surface, leaving the canvas blank.
    pub fn destroy(self) {
        let _ = render::clear(&self.ctx, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }

    fn resize(&mut self) {
        let dpr = device_pixel_ratio();
        self.width = f64::from(self.canvas.client_width().max(1));
        self.height = f64::from(self.canvas.client_height().max(1));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((self.width * dpr).round() as u32);
            self.canvas.set_height((self.height * dpr).round() as u32);
        }
    }
}

fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio()).max(1.0)
}
