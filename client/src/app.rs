//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::analyze::AnalyzePage;
use crate::state::{input::InputState, submission::SubmissionTracker};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the input and submission contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let input = RwSignal::new(InputState::default());
    let submission = RwSignal::new(SubmissionTracker::default());

    provide_context(input);
    provide_context(submission);

    view! {
        <Stylesheet id="leptos" href="/pkg/insightboard.css"/>
        <Title text="Insightboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AnalyzePage/>
            </Routes>
        </Router>
    }
}
