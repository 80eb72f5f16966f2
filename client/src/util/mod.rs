//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure projections (`counter`, `chart_specs`, `report_view`) are kept apart
//! from browser concerns (`task`, `page_scroll`) so the rendering rules are
//! testable natively.

pub mod chart_slot;
pub mod chart_specs;
pub mod counter;
pub mod page_scroll;
pub mod report_view;
pub mod task;
