//! Showcase page: loads the examples document and renders it by gap duration.
//!
//! LIFECYCLE
//! =========
//! The document is requested once when the page mounts. Until it arrives the
//! page shows a loading placeholder. A failed request is logged by the loader
//! and the placeholder stays up; there is no retry.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use catalog::{Example, ExamplesDocument, GapCategory};
use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::example_section::ExampleSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::showcase::ViewState;
use crate::util::base_path::base_path;

/// One section of the rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionPlan {
    pub category: GapCategory,
    pub heading: String,
    pub examples: Vec<Example>,
}

pub fn section_heading(category: GapCategory) -> String {
    format!("Gap Duration: {}", category.title())
}

/// Sections in fixed category order, each carrying its examples in document order.
pub fn plan_sections(doc: &ExamplesDocument) -> Vec<SectionPlan> {
    doc.sections()
        .map(|(category, examples)| SectionPlan {
            category,
            heading: section_heading(category),
            examples: examples.to_vec(),
        })
        .collect()
}

/// Showcase page root.
#[component]
pub fn ShowcasePage() -> impl IntoView {
    // No reactive reads inside the fetcher, so this runs exactly once per mount.
    let examples = LocalResource::new(|| crate::net::api::load_examples());
    let view_state = move || ViewState::from_fetch(examples.get());

    move || match view_state() {
        ViewState::Loading => view! { <LoadingView/> }.into_any(),
        ViewState::Ready(doc) => view! { <ShowcaseContent doc=doc/> }.into_any(),
    }
}

#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class="showcase-loading">
            <div class="showcase-loading__text">"Loading examples..."</div>
        </div>
    }
}

#[component]
fn ShowcaseContent(doc: ExamplesDocument) -> impl IntoView {
    // Resolved once; the DOM lookup is not repeated per media element.
    let base = base_path();
    let sections = plan_sections(&doc)
        .into_iter()
        .map(|plan| {
            view! { <ExampleSection heading=plan.heading examples=plan.examples base=base.clone()/> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="showcase">
            <SiteHeader/>
            <main class="container showcase-main">
                <AboutSection/>
                {sections}
            </main>
            <SiteFooter/>
        </div>
    }
}
