//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the loader, error banner, and dashboard. They receive
//! plain data as props; the page decides which one is mounted.

pub mod animated_counter;
pub mod chart_canvas;
pub mod dashboard;
pub mod error_banner;
pub mod loading_indicator;
pub mod report_list;
