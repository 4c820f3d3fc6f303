//! Deployment paths shared by the client and the preview server.
//!
//! The site is published either at the host root (`/`) or under a project
//! prefix such as `/trial_web/`. Both sides normalise the configured prefix
//! the same way so the client's fetch URL and the server's mount point agree.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// Location of the examples document relative to the base path.
pub const EXAMPLES_PATH: &str = "public/data/examples.json";

/// Base path used when none is configured. Must match `public_url` in
/// `client/Trunk.toml`.
pub const DEFAULT_BASE_PATH: &str = "/trial_web/";

/// Base path for a site served at the host root.
pub const ROOT_PATH: &str = "/";

/// Normalise a base path to the `/segment/` form.
///
/// Blank input maps to `/`. Leading `./` and repeated slashes are collapsed.
#[must_use]
pub fn normalize_base_path(raw: &str) -> String {
    let segments: Vec<&str> = raw
        .trim()
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    if segments.is_empty() {
        return ROOT_PATH.to_owned();
    }
    format!("/{}/", segments.join("/"))
}

/// Whether a URL should be used as-is instead of being joined to the base path.
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with('/')
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("data:")
        || url.starts_with("blob:")
}

/// Resolve a document-relative URL against a normalised base path.
///
/// Empty URLs stay empty so the media element renders without a source.
#[must_use]
pub fn resolve_asset(base: &str, url: &str) -> String {
    let url = url.trim();
    if url.is_empty() || is_absolute_url(url) {
        return url.to_owned();
    }
    let relative = url.trim_start_matches("./");
    format!("{}{relative}", normalize_base_path(base))
}
