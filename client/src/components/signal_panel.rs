//! One signal variant on an example card: heading, caption, audio, spectrogram.

use leptos::prelude::*;

use crate::components::audio_player::AudioPlayer;
use crate::components::example_card::PanelSources;

/// Caption, audio player and spectrogram for one signal variant.
#[component]
pub fn SignalPanel(sources: PanelSources) -> impl IntoView {
    let PanelSources { kind, caption, audio, spectrogram } = sources;
    let class = format!("signal-panel signal-panel--{}", kind.slug());
    let spectrogram = (!spectrogram.is_empty()).then_some(spectrogram);

    view! {
        <div class=class>
            <div class="signal-panel__heading">
                <WaveformIcon/>
                <h3>{kind.heading()}</h3>
            </div>
            <p class="signal-panel__caption">{caption}</p>
            <AudioPlayer src=audio/>
            <img class="signal-panel__spectrogram" src=spectrogram alt=kind.spectrogram_alt() loading="lazy"/>
        </div>
    }
}

#[component]
fn WaveformIcon() -> impl IntoView {
    view! {
        <svg class="signal-panel__icon" viewBox="0 0 24 24" aria-hidden="true" stroke-linecap="round" stroke-linejoin="round">
            <path d="M2 13a2 2 0 0 0 2-2V7a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0V4a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0v-4a2 2 0 0 1 2-2"></path>
        </svg>
    }
}
