//! Health endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::state::{AppState, CatalogStatus};

/// `GET /healthz` — `200` when the examples document loaded, `503` otherwise.
pub async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, body) = health_report(&state.catalog);
    (status, Json(body))
}

pub(crate) fn health_report(catalog: &CatalogStatus) -> (StatusCode, Value) {
    match catalog {
        CatalogStatus::Loaded(summary) => (
            StatusCode::OK,
            json!({ "status": "ok", "total": summary.total, "categories": summary.categories }),
        ),
        CatalogStatus::Failed(error) => {
            (StatusCode::SERVICE_UNAVAILABLE, json!({ "status": "degraded", "error": error }))
        }
    }
}

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;
