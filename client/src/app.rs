//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::showcase::ShowcasePage;

/// Root application component.
///
/// The showcase is a single page, so there is no router; the page owns its
/// own load state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Speech Inpainting"/>
        <ShowcasePage/>
    }
}
