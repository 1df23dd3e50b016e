//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Catalog**: Counts loaded books
/// 2. **Ledger**: Counts recorded purchases
/// 3. **Storage**: Checks the books directory is readable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": { "status": "ok", "message": "12 books loaded" },
///     "ledger": { "status": "ok", "message": "3 purchases recorded" },
///     "storage": { "status": "ok", "message": "Books directory readable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state).await;

    let ledger_check = check_ledger(&state).await;

    let storage_check = check_storage(&state).await;

    let all_healthy = catalog_check.is_ok() && ledger_check.is_ok() && storage_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            ledger: ledger_check,
            storage: storage_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_catalog(state: &AppState) -> CheckStatus {
    match state.catalog_service.count().await {
        Ok(count) => CheckStatus::ok(format!("{count} books loaded")),
        Err(e) => CheckStatus::error(format!("Catalog error: {e}")),
    }
}

async fn check_ledger(state: &AppState) -> CheckStatus {
    match state.purchase_service.sales_summary().await {
        Ok(summary) => CheckStatus::ok(format!(
            "{} purchases recorded",
            summary.total_purchases
        )),
        Err(e) => CheckStatus::error(format!("Ledger error: {e}")),
    }
}

async fn check_storage(state: &AppState) -> CheckStatus {
    if state.storage.health_check().await {
        CheckStatus::ok("Books directory readable")
    } else {
        CheckStatus::error("Books directory unavailable")
    }
}
