//! Project description shown above the example sections.

use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="about">
            <h2>"About the Project"</h2>
            <p>
                "This project demonstrates the capabilities of our speech inpainting model. \
                 Below are examples showing how the model reconstructs masked portions of speech \
                 signals, comparing the masked input, model output, and ground truth target. \
                 Examples are organized by gap duration (0.25, 0.5, and 1 second) to showcase \
                 the model's performance across different masking intervals."
            </p>
        </section>
    }
}
