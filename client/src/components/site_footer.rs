use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p class="site-footer__text">"© 2024 Speech Inpainting Project. All rights reserved."</p>
            </div>
        </footer>
    }
}
