//! KPI card whose number counts up to the section size.
//!
//! DESIGN
//! ======
//! The count-up runs as a `ScheduledTask` owned by this component and is
//! cancelled on unmount, so resetting mid-animation leaves no ticks behind.
//! Writes go through `try_set` in case the signal is already disposed.

use leptos::prelude::*;

/// Counter card for one report section.
#[component]
pub fn AnimatedCounter(target: usize, label: &'static str, modifier: &'static str) -> impl IntoView {
    let displayed = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        use crate::consts::COUNTER_TICK_MS;
        use crate::util::counter::CounterAnimation;
        use crate::util::task::ScheduledTask;

        let task = ScheduledTask::spawn(async move {
            let mut anim = CounterAnimation::new(target);
            while !anim.is_finished() {
                gloo_timers::future::TimeoutFuture::new(COUNTER_TICK_MS).await;
                if displayed.try_set(anim.tick()).is_some() {
                    return;
                }
            }
        });
        on_cleanup(move || task.cancel());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }

    view! {
        <div class=format!("kpi-card kpi-card--{modifier}")>
            <span class="kpi-card__value">{move || displayed.get()}</span>
            <span class="kpi-card__label">{label}</span>
        </div>
    }
}
