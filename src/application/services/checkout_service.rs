//! Checkout orchestration service.

use std::sync::Arc;

use crate::application::services::PurchaseService;
use crate::domain::checkout::{
    CheckoutStage, CreditCardValidationError, InvalidBillingInfo, validate_billing_info,
    validate_credit_card,
};
use crate::domain::entities::{BillingInfo, BookId, CreditCard, Purchase};
use crate::domain::repositories::{CatalogRepository, PurchaseRepository};
use crate::error::AppError;
use serde_json::json;

/// Service running a checkout from request to recorded purchase.
///
/// A checkout moves through [`CheckoutStage`]s:
///
/// 1. billing information is validated
/// 2. the card is validated (never stored or logged)
/// 3. the books are purchased
///
/// The first failing step rejects the checkout and nothing after it runs.
pub struct CheckoutService<C: CatalogRepository, P: PurchaseRepository> {
    purchase_service: Arc<PurchaseService<C, P>>,
}

impl<C: CatalogRepository, P: PurchaseRepository> CheckoutService<C, P> {
    /// Creates a new checkout service.
    pub fn new(purchase_service: Arc<PurchaseService<C, P>>) -> Self {
        Self { purchase_service }
    }

    /// Validates the checkout data and records the purchase.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with kind `invalid_billing_info` if the
    /// billing information is rejected.
    /// Returns [`AppError::PaymentRequired`] with kind `credit_card_validation`
    /// if the card is rejected.
    /// Returns [`AppError::NotFound`] with kind `book_not_found` if a book id is
    /// not in the catalog.
    pub async fn checkout(
        &self,
        billing_info: &BillingInfo,
        credit_card: &CreditCard,
        book_ids: &[BookId],
    ) -> Result<Purchase, AppError> {
        let mut stage = CheckoutStage::Received;
        tracing::debug!(stage = %stage, books = book_ids.len(), "Checkout started");

        let address = &billing_info.billing_address;
        if let Err(e) = validate_billing_info(
            billing_info.first_name.as_deref(),
            billing_info.last_name.as_deref(),
            address,
        ) {
            return Err(reject(stage, invalid_billing_info(e)));
        }
        stage = transition(stage);

        if let Err(e) = validate_credit_card(credit_card) {
            return Err(reject(stage, card_rejected(e)));
        }
        stage = transition(stage);

        let first_name = billing_info.first_name.as_deref().unwrap_or_default();
        let last_name = billing_info.last_name.as_deref().unwrap_or_default();

        match self
            .purchase_service
            .purchase_books(first_name, last_name, address, book_ids)
            .await
        {
            Ok(purchase) => {
                let stage = transition(stage);
                debug_assert!(stage.is_terminal());
                Ok(purchase)
            }
            Err(e) => Err(reject(stage, e)),
        }
    }
}

fn transition(from: CheckoutStage) -> CheckoutStage {
    let to = from.advance().unwrap_or(CheckoutStage::Rejected);
    tracing::debug!(from = %from, to = %to, "Checkout stage advanced");
    to
}

fn reject(from: CheckoutStage, error: AppError) -> AppError {
    tracing::debug!(
        from = %from,
        to = %CheckoutStage::Rejected,
        kind = error.kind().unwrap_or("unknown"),
        "Checkout rejected"
    );
    error
}

fn invalid_billing_info(error: InvalidBillingInfo) -> AppError {
    AppError::bad_request(
        error.to_string(),
        json!({ "kind": "invalid_billing_info", "field": error.field() }),
    )
}

fn card_rejected(error: CreditCardValidationError) -> AppError {
    AppError::payment_required(
        error.to_string(),
        json!({ "kind": "credit_card_validation" }),
    )
}
