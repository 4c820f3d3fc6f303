//! Section grouping all examples for one gap duration.

use catalog::Example;
use leptos::prelude::*;

use crate::components::example_card::ExampleCard;

/// A titled section followed by one card per example, in document order.
/// The title is rendered even when `examples` is empty. `base` is the
/// deployment base path media URLs resolve against.
#[component]
pub fn ExampleSection(heading: String, examples: Vec<Example>, base: String) -> impl IntoView {
    let cards = examples
        .into_iter()
        .map(|example| view! { <ExampleCard example=example base=base.clone()/> })
        .collect::<Vec<_>>();

    view! {
        <section class="example-section">
            <h2 class="example-section__title">{heading}</h2>
            {cards}
        </section>
    }
}
