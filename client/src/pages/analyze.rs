//! Upload page: document selection, submission, and the result region.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the request lifecycle: picking or dropping
//! a document, sending it, scheduling the delayed status line, recording the
//! outcome, and resetting back to the upload step. What appears below the
//! upload panel is decided solely by `ViewRegion`.
//!
//! The browser `File` handle is not `Send`, so it lives in page-local storage
//! beside the `InputState` that describes it.

#[cfg(test)]
#[path = "analyze_test.rs"]
mod analyze_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::dashboard::Dashboard;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading_indicator::LoadingIndicator;
use crate::consts::ACCEPTED_MIME_TYPE;
use crate::state::input::InputState;
use crate::state::submission::SubmissionTracker;
use crate::state::view::{self, ViewRegion};

fn submit_label(in_flight: bool) -> &'static str {
    if in_flight { "Analyzing…" } else { "Analyze Report" }
}

fn drop_zone_class(drag_over: bool) -> &'static str {
    if drag_over { "drop-zone drop-zone--drag-over" } else { "drop-zone" }
}

#[cfg(feature = "hydrate")]
fn candidate_of(file: &web_sys::File) -> crate::state::input::Candidate {
    crate::state::input::Candidate::new(file.name(), file.type_())
}

/// Upload page with the loader, error banner, and dashboard beneath it.
#[component]
pub fn AnalyzePage() -> impl IntoView {
    let input = expect_context::<RwSignal<InputState>>();
    let submission = expect_context::<RwSignal<SubmissionTracker>>();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let file_store = StoredValue::new_local(None::<web_sys::File>);
    #[cfg(feature = "hydrate")]
    let status_task = StoredValue::new(None::<crate::util::task::ScheduledTask>);

    let region = Memo::new(move |_| submission.with(|s| ViewRegion::from(s)));
    let in_flight = move || submission.with(SubmissionTracker::in_flight);
    let submit_enabled = move || {
        let has_document = input.with(InputState::has_document);
        submission.with(|s| s.submit_enabled(has_document))
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let el = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = el.files().and_then(|files| files.get(0)) {
                input.update(|s| s.select_from_picker(candidate_of(&file)));
                file_store.set_value(Some(file));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !input.with_untracked(|s| s.drag_over) {
            input.update(|s| s.set_drag_over(true));
        }
    };

    let on_drag_leave = move |_: leptos::ev::DragEvent| {
        input.update(|s| s.set_drag_over(false));
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let dropped = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
            let Some(file) = dropped else {
                input.update(|s| s.set_drag_over(false));
                return;
            };
            let accepted = input.try_update(|s| s.select_from_drop(candidate_of(&file))).unwrap_or(false);
            if accepted {
                file_store.set_value(Some(file));
            } else {
                log::debug!("ignored dropped file of type {:?}", file.type_());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            input.update(|s| s.set_drag_over(false));
        }
    };

    let on_submit = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::consts::ANALYZING_STATUS_DELAY_MS;
            use crate::util::task::ScheduledTask;

            let Some(file) = file_store.get_value() else {
                return;
            };
            let has_document = input.with_untracked(InputState::has_document);
            let ticket = match submission.try_update(|s| s.begin(has_document)) {
                Some(Ok(ticket)) => ticket,
                Some(Err(e)) => {
                    log::debug!("submit ignored: {e}");
                    return;
                }
                None => return,
            };
            log::info!("submitting {} ({} bytes)", file.name(), file.size());

            let delayed = ScheduledTask::after(ANALYZING_STATUS_DELAY_MS, async move {
                submission.try_update(|s| s.mark_analyzing(ticket));
            });
            status_task.set_value(Some(delayed));

            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::analyze_document(&file).await;
                match &outcome {
                    Ok(report) => log::info!("analysis complete: counts {:?}", report.counts()),
                    Err(e) => log::warn!("analysis failed: {e}"),
                }
                status_task.try_update_value(|pending| {
                    submission.try_update(|s| s.finish(pending, ticket, outcome));
                });
            });
        }
    };

    let on_reset = Callback::new(move |()| {
        let mut dashboard_hidden = false;
        input.update(|i| submission.update(|s| dashboard_hidden = view::reset(i, s)));
        #[cfg(feature = "hydrate")]
        {
            file_store.set_value(None);
            if let Some(el) = file_input_ref.get_untracked() {
                el.set_value("");
            }
            log::info!("reset to upload step (dashboard was showing: {dashboard_hidden})");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (dashboard_hidden, file_input_ref);
        }
        crate::util::page_scroll::to_top();
    });

    view! {
        <main class="analyze-page">
            <header class="analyze-page__header">
                <h1>"Business Report Analyzer"</h1>
                <p class="analyze-page__subtitle">
                    "Upload a yearly report as PDF to get strengths, weaknesses, and next moves."
                </p>
            </header>

            <section class="upload-panel">
                <label
                    class=move || drop_zone_class(input.with(|s| s.drag_over))
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <input
                        class="upload-panel__input"
                        type="file"
                        accept=ACCEPTED_MIME_TYPE
                        node_ref=file_input_ref
                        on:change=on_pick
                    />
                    <span class="drop-zone__hint">"Drop a PDF here or click to browse"</span>
                </label>
                <Show when=move || input.with(InputState::has_document)>
                    <p class="upload-panel__file-name">
                        "Selected: "
                        <span>{move || input.with(|s| s.display_name().unwrap_or_default().to_owned())}</span>
                    </p>
                </Show>
                <button
                    class="upload-panel__submit"
                    disabled=move || !submit_enabled()
                    on:click=on_submit
                >
                    {move || submit_label(in_flight())}
                </button>
            </section>

            {move || match region.get() {
                ViewRegion::Idle => ().into_any(),
                ViewRegion::Loading { message } => view! { <LoadingIndicator message/> }.into_any(),
                ViewRegion::Error { message } => view! { <ErrorBanner message/> }.into_any(),
                ViewRegion::Dashboard(report) => view! { <Dashboard report on_reset/> }.into_any(),
            }}
        </main>
    }
}
