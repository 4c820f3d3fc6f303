//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The built site is served as static files under the configured base path,
//! the way it is laid out on the static host it is published to. `/healthz`
//! reports whether the examples document checked out at startup.

pub mod health;

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header::LOCATION;
use axum::middleware::map_response_with_state;
use axum::response::{Redirect, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Static site + health route.
pub fn app(state: AppState) -> Router {
    let site = ServeDir::new(&state.config.site_dir).append_index_html_on_directories(true);
    let mount = mount_path(&state.config.base_path);

    let router = Router::new()
        .route("/healthz", get(health::healthz))
        .with_state(state.clone());

    let router = match mount {
        None => router.fallback_service(site),
        Some(mount) => {
            let target = state.config.base_path.clone();
            // ServeDir only sees the prefix-stripped path, so its directory
            // redirects need the mount put back.
            let nested = Router::new()
                .fallback_service(site)
                .layer(map_response_with_state(Arc::<str>::from(mount), restore_prefix));
            router
                .route("/", get(move || async move { Redirect::temporary(&target) }))
                .nest_service(mount, nested)
        }
    };

    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

/// Axum nest path for a normalised base path; `None` when served at the root.
fn mount_path(base_path: &str) -> Option<&str> {
    let trimmed = base_path.trim_end_matches('/');
    (!trimmed.is_empty()).then_some(trimmed)
}

async fn restore_prefix(State(mount): State<Arc<str>>, mut response: Response) -> Response {
    if response.status().is_redirection() {
        let fixed = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|location| prefixed_location(&mount, location))
            .and_then(|location| HeaderValue::from_str(&location).ok());
        if let Some(location) = fixed {
            response.headers_mut().insert(LOCATION, location);
        }
    }
    response
}

/// Host-relative redirect target with `mount` prepended; other targets are left alone.
fn prefixed_location(mount: &str, location: &str) -> Option<String> {
    let host_relative = location.starts_with('/') && !location.starts_with("//");
    (host_relative && !location.starts_with(&format!("{mount}/"))).then(|| format!("{mount}{location}"))
}
