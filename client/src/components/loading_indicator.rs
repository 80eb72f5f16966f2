//! Spinner with the current submission status line.

use leptos::prelude::*;

/// Loader shown while a submission is in flight.
#[component]
pub fn LoadingIndicator(message: String) -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite">
            <span class="loader__spinner" aria-hidden="true"></span>
            <p class="loader__text">{message}</p>
        </div>
    }
}
