//! # client
//!
//! Leptos + WASM front end for the report analyzer. A user picks or drops a
//! PDF, the page sends it to the host's `/analyze` relay, and the returned
//! report is shown as a dashboard of counters, lists, and charts.
//!
//! | Module | Role |
//! |--------|------|
//! | `state` | Input, submission lifecycle, and the derived view region |
//! | `net` | Report normalization and the upload request |
//! | `util` | Counter animation, chart specs and slots, cancellable tasks |
//! | `components` | Dashboard pieces, loader, and error banner |
//! | `pages` | The upload page that ties it together |
//!
//! Charts are drawn by the `charts` crate through `ChartCanvas`.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
