//! Page state provided to components through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `input` owns the selected document, `submission` the request lifecycle, and
//! `view` projects both onto the one region that is visible.

pub mod input;
pub mod submission;
pub mod view;
