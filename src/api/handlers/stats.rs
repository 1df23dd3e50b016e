//! Handler for sales statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::SalesStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregated sales over all recorded purchases.
///
/// # Endpoint
///
/// `GET /api/stats/sales`
///
/// # Response
///
/// ```json
/// {
///   "total_purchases": 2,
///   "revenue_usd": 79.9,
///   "books": [
///     { "book_id": 1, "copies_sold": 2 }
///   ]
/// }
/// ```
pub async fn sales_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<SalesStatsResponse>, AppError> {
    let summary = state.purchase_service.sales_summary().await?;

    Ok(Json(SalesStatsResponse::from(summary)))
}
