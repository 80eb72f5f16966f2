//! Networking modules for the analysis request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single upload call and `types` defines the wire schema
//! plus the normalized report the dashboard renders.

pub mod api;
pub mod types;
