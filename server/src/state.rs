//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! built once at startup and never mutated: the server config plus the result
//! of checking the examples document.

use std::path::Path;
use std::sync::Arc;

use catalog::CatalogSummary;

use crate::config::ServerConfig;

/// Outcome of reading the examples document at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loaded(CatalogSummary),
    Failed(String),
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub catalog: Arc<CatalogStatus>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, catalog: CatalogStatus) -> Self {
        Self { config: Arc::new(config), catalog: Arc::new(catalog) }
    }
}

/// Read and check the examples document.
///
/// Failures are logged and recorded, never fatal: the page served to
/// browsers handles a bad document on its own.
pub async fn load_catalog(path: &Path) -> CatalogStatus {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "examples document unreadable");
            return CatalogStatus::Failed(format!("{}: {e}", path.display()));
        }
    };

    match catalog::parse_document(&raw) {
        Ok(doc) => {
            let duplicates = doc.duplicate_ids();
            if !duplicates.is_empty() {
                tracing::warn!(ids = ?duplicates, "examples document has duplicate ids");
            }
            let summary = doc.summary();
            tracing::info!(
                path = %path.display(),
                total = summary.total,
                categories = ?summary.categories,
                "examples document loaded"
            );
            CatalogStatus::Loaded(summary)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "examples document invalid");
            CatalogStatus::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
