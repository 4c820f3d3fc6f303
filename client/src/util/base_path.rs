//! Deployment base path resolution.
//!
//! Trunk writes its `public_url` into the `<base href>` of `index.html`. The
//! browser build reads it from there so data and media URLs follow whatever
//! prefix the site was built for. Outside the browser (and when the page has
//! no `<base>` element) the compile-time `SHOWCASE_BASE_PATH` is used,
//! falling back to `/`.

#[cfg(test)]
#[path = "base_path_test.rs"]
mod base_path_test;

use catalog::paths::{DEFAULT_BASE_PATH, normalize_base_path};

/// Base path baked in at compile time.
fn compiled_base_path() -> &'static str {
    option_env!("SHOWCASE_BASE_PATH").unwrap_or(DEFAULT_BASE_PATH)
}

/// Current deployment base path in `/segment/` form.
pub fn base_path() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(href) = document_base_href() {
            return normalize_base_path(base_href_path(&href));
        }
    }
    normalize_base_path(compiled_base_path())
}

/// Path component of a `<base href>` value, which may be a full URL.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn base_href_path(href: &str) -> &str {
    match href.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |idx| &rest[idx..]),
        None => href,
    }
}

#[cfg(feature = "csr")]
fn document_base_href() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.query_selector("base").ok()??.get_attribute("href")
}
