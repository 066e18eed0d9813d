//! Inbound HTTP handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Local;
use serde_json::{Value, json};
use tracing::info;

use crate::careers::{
    AppState,
    cache::REQUISITIONS_CACHE_TAG,
    error::CareersError,
    openings::{OpeningsByDepartment, group_by_department},
};

/// GET /api/openings
///
/// Serves the cached requisition collection (refreshing it through the ADP
/// client when stale) reshaped into openings grouped by department.
pub async fn get_openings(
    State(state): State<AppState>,
) -> Result<Json<OpeningsByDepartment>, CareersError> {
    let adp = state.adp.clone();
    let requisitions = state
        .requisitions
        .get_or_compute(REQUISITIONS_CACHE_TAG, || async move {
            let token = adp.acquire_token().await?;
            adp.fetch_open_requisitions(&token).await.map(Arc::new)
        })
        .await?;

    let openings = group_by_department(&requisitions, Local::now().date_naive());
    info!(
        departments = openings.len(),
        openings = openings.values().map(Vec::len).sum::<usize>(),
        "serving openings"
    );
    Ok(Json(openings))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
