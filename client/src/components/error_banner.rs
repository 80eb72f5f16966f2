//! Banner for a failed submission.

use leptos::prelude::*;

/// Error banner. `message` is shown verbatim as text.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-box" role="alert">
            <span class="error-box__icon" aria-hidden="true">"⚠"</span>
            <span class="error-box__text">{message}</span>
        </div>
    }
}
