//! Canvas hosting one chart from the `charts` crate.
//!
//! DESIGN
//! ======
//! The live `charts::Chart` sits in a `ChartSlot` stored on this component's
//! owner. A repaint goes through `replace_with`, which destroys the old chart
//! first; disposing the owner drops the slot, which destroys the last one.

use charts::ChartSpec;
use leptos::prelude::*;

/// A chart surface. `label` is the accessible name of the canvas.
#[component]
pub fn ChartCanvas(spec: ChartSpec, label: &'static str) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::chart_slot::ChartSlot;

        let slot = StoredValue::new_local(ChartSlot::<charts::Chart>::default());
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let spec = spec.clone();
            slot.update_value(|slot| {
                if let Err(e) = slot.replace_with(|| charts::Chart::new(canvas, spec)) {
                    log::warn!("{label} failed to render: {e}");
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = spec;
    }

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{label}</h3>
            <canvas class="chart-card__canvas" node_ref=canvas_ref role="img" aria-label=label></canvas>
        </div>
    }
}
