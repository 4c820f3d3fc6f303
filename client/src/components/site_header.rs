//! Page header with the project title and repository link.

use leptos::prelude::*;

/// Repository the showcase links to.
pub const REPOSITORY_URL: &str = "https://github.com/yourusername/speech-inpainting";

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container">
                <div>
                    <h1 class="site-header__title">"Speech Inpainting"</h1>
                    <p class="site-header__subtitle">
                        "Reconstructing masked speech signals with deep learning"
                    </p>
                </div>
                <a class="site-header__repo" href=REPOSITORY_URL target="_blank" rel="noopener noreferrer">
                    <svg class="site-header__repo-icon" viewBox="0 0 24 24" width="20" height="20" aria-hidden="true" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"></path>
                        <path d="M9 18c-4.51 2-5-2-7-2"></path>
                    </svg>
                    <span>"View on GitHub"</span>
                </a>
            </div>
        </header>
    }
}
