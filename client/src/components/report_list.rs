//! Labeled list of report items.
//!
//! Items come straight from the analysis service and are inserted as text
//! nodes, never as markup.

use leptos::prelude::*;

use crate::util::report_view::ReportSection;

/// One dashboard list, e.g. "Weak Points".
#[component]
pub fn ReportList(section: ReportSection, items: Vec<String>) -> impl IntoView {
    let empty = items.is_empty();
    view! {
        <div class=format!("report-list report-list--{}", section.modifier())>
            <h3 class="report-list__title">{section.title()}</h3>
            <ul class="report-list__items">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="report-list__item">
                                <span class="dot" aria-hidden="true"></span>
                                <span>{item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show when=move || empty>
                <p class="report-list__empty">"Nothing reported."</p>
            </Show>
        </div>
    }
}
