//! Examples document fetch.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds (tests, tooling): a stub returning
//! [`LoadError::Unavailable`], since the document only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged to the console and returned to the caller, which keeps
//! the page in its loading state. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::ExamplesDocument;
use catalog::paths::{EXAMPLES_PATH, resolve_asset};

/// Why the examples document could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body was not a usable examples document.
    #[error("{0}")]
    Catalog(String),
    /// Fetching is only possible in the browser build.
    #[error("examples can only be fetched in the browser")]
    Unavailable,
}

/// URL of the examples document under `base`.
pub fn examples_endpoint(base: &str) -> String {
    resolve_asset(base, EXAMPLES_PATH)
}

/// Fetch and parse the examples document, logging any failure.
///
/// # Errors
///
/// Returns the [`LoadError`] describing why the document is unavailable.
pub async fn load_examples() -> Result<ExamplesDocument, LoadError> {
    let url = examples_endpoint(&crate::util::base_path::base_path());
    let result = fetch_examples(&url).await;
    match &result {
        Ok(doc) => log::debug!("loaded {} examples from {url}", doc.total()),
        Err(e) => log::error!("Error loading examples: {e}"),
    }
    result
}

async fn fetch_examples(url: &str) -> Result<ExamplesDocument, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| LoadError::Network(e.to_string()))?;
        decode_examples(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(LoadError::Unavailable)
    }
}

/// Parse a fetched body into a document.
pub(crate) fn decode_examples(body: &str) -> Result<ExamplesDocument, LoadError> {
    catalog::parse_document(body).map_err(|e| LoadError::Catalog(e.to_string()))
}
