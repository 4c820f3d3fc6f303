//! Native audio control bound to a single source URL.

use leptos::prelude::*;

/// Browser audio element with visible controls.
///
/// An empty `src` renders the control without a source rather than pointing
/// it at the page URL.
#[component]
pub fn AudioPlayer(src: String) -> impl IntoView {
    let src = (!src.is_empty()).then_some(src);

    view! {
        <div class="audio-player">
            <audio class="audio-player__control" src=src controls=true preload="none">
                "Your browser does not support the audio element."
            </audio>
        </div>
    }
}
