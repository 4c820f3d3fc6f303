//! Card showing the masked, inpainted and target signals of one example.

#[cfg(test)]
#[path = "example_card_test.rs"]
mod example_card_test;

use catalog::{Example, SignalKind};
use leptos::prelude::*;

use crate::components::signal_panel::SignalPanel;
use catalog::paths::resolve_asset;

/// Resolved sources for one signal panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSources {
    pub kind: SignalKind,
    pub caption: String,
    pub audio: String,
    pub spectrogram: String,
}

/// The three panels of a card, in masked / inpainted / target order, with
/// media URLs resolved against `base`.
pub fn panel_sources(example: &Example, base: &str) -> [PanelSources; 3] {
    example.signals().map(|signal| PanelSources {
        kind: signal.kind,
        caption: signal.caption.to_owned(),
        audio: resolve_asset(base, signal.audio),
        spectrogram: resolve_asset(base, signal.spectrogram),
    })
}

/// A single example rendered as three stacked signal panels.
#[component]
pub fn ExampleCard(example: Example, base: String) -> impl IntoView {
    let panels = panel_sources(&example, &base)
        .into_iter()
        .map(|sources| view! { <SignalPanel sources=sources/> })
        .collect::<Vec<_>>();

    view! {
        <article class="example-card" data-example-id=example.id>
            {panels}
        </article>
    }
}
