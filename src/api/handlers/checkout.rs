//! Handler for the checkout endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::checkout::{CheckoutRequest, CheckoutResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Validates billing and card details and records a purchase.
///
/// # Endpoint
///
/// `POST /api/checkout`
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "Ada",
///   "last_name": "Lovelace",
///   "billing_address": {
///     "street": "12 St James's Square",
///     "city": "London",
///     "postal_code": "SW1Y 4JH",
///     "country": "GB"
///   },
///   "credit_card": {
///     "number": "4111 1111 1111 1111",
///     "expiration": "12/29",
///     "security_code": "123"
///   },
///   "book_ids": [1, 4]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Thank you for your purchase, Ada!",
///   "purchase_id": 1,
///   "receipt": "q3Xv8Zk1LmN0pA2b",
///   "book_ids": [1, 4],
///   "total_usd": 64.9,
///   "purchased_at": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed body, bad `book_ids` count, or invalid
///   billing information (`details.kind = "invalid_billing_info"`)
/// - 402 Payment Required: card rejected (`details.kind = "credit_card_validation"`)
/// - 404 Not Found: a book id is not in the catalog (`details.kind = "book_not_found"`)
pub async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
    })?;
    payload.validate()?;

    let (billing_info, credit_card, book_ids) = payload.into_parts();

    let purchase = state
        .checkout_service
        .checkout(&billing_info, &credit_card, &book_ids)
        .await
        .inspect_err(|e| {
            if let AppError::PaymentRequired { message, .. } = e {
                tracing::warn!(reason = %message, "Credit card rejected at checkout");
            }
        })?;

    Ok(Json(CheckoutResponse::from(purchase)))
}
