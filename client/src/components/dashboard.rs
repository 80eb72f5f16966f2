//! Dashboard projecting one analysis report.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while the view region is `Dashboard`, and rebuilt from scratch
//! for every successful submission. Counters, lists, and both charts are all
//! derived here from the same immutable report.

use leptos::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::chart_canvas::ChartCanvas;
use crate::components::report_list::ReportList;
use crate::net::types::AnalysisReport;
use crate::util::chart_specs::{bar_spec, radar_spec};
use crate::util::report_view::ReportSection;

/// Report dashboard with a reset control.
#[component]
pub fn Dashboard(report: AnalysisReport, on_reset: Callback<()>) -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let Some(el) = section_ref.get() {
                crate::util::page_scroll::into_view(&el);
            }
        });
    }

    let counters = ReportSection::ALL
        .iter()
        .map(|section| {
            view! {
                <AnimatedCounter
                    target=section.items(&report).len()
                    label=section.title()
                    modifier=section.modifier()
                />
            }
        })
        .collect_view();

    let lists = ReportSection::ALL
        .iter()
        .map(|section| view! { <ReportList section=*section items=section.items(&report).to_vec()/> })
        .collect_view();

    view! {
        <section class="dashboard" node_ref=section_ref>
            <header class="dashboard__header">
                <h2>"Analysis Results"</h2>
                <button class="dashboard__reset" on:click=move |_| on_reset.run(())>
                    "Analyze another report"
                </button>
            </header>
            <div class="dashboard__situation">
                <h3>"Current Business Situation"</h3>
                <p>{report.situation.clone()}</p>
            </div>
            <div class="dashboard__kpis">{counters}</div>
            <div class="dashboard__charts">
                <ChartCanvas spec=radar_spec(&report) label="Strengths vs. Weaknesses"/>
                <ChartCanvas spec=bar_spec(&report) label="Insight Counts"/>
            </div>
            <div class="dashboard__lists">{lists}</div>
        </section>
    }
}
