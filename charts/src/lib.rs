//! Chart painting for the report dashboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Callers
//! describe a chart as plain data ([`spec::ChartSpec`]), hand it a canvas, and
//! get back a [`chart::Chart`] handle that must be destroyed before another
//! chart is painted onto the same surface.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`spec`] | Dataset description: kind, labels, series, paints |
//! | [`layout`] | Pure geometry for radar and bar charts |
//! | [`render`] | Draws a spec to a 2D context |
//! | [`chart`] | Destroyable chart handle bound to one canvas |
//! | [`consts`] | Shared sizing and color constants |

pub mod chart;
pub mod consts;
pub mod layout;
pub mod render;
pub mod spec;

pub use chart::{Chart, ChartError};
pub use spec::{ChartKind, ChartSpec, Paint, Rgba, Series};
