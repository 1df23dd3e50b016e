//! Purchase recording service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::services::catalog_service::book_not_found;
use crate::domain::entities::{BillingAddress, BookId, Buyer, NewPurchase, Purchase};
use crate::domain::repositories::{CatalogRepository, PurchaseRepository, SalesSummary};
use crate::error::AppError;
use crate::utils::receipt_code::generate_receipt_code;
use serde_json::json;

/// Service that turns validated checkout data into recorded purchases.
///
/// Card details never reach this service, so they can never end up in the
/// ledger.
pub struct PurchaseService<C: CatalogRepository, P: PurchaseRepository> {
    catalog_repository: Arc<C>,
    purchase_repository: Arc<P>,
}

impl<C: CatalogRepository, P: PurchaseRepository> PurchaseService<C, P> {
    /// Creates a new purchase service.
    pub fn new(catalog_repository: Arc<C>, purchase_repository: Arc<P>) -> Self {
        Self {
            catalog_repository,
            purchase_repository,
        }
    }

    /// Records a purchase of `book_ids` for the given buyer.
    ///
    /// Assumes the billing information was already validated. Duplicate ids
    /// collapse to their first occurrence; the total is the sum of the
    /// distinct books' prices, rounded to cents.
    ///
    /// # All or nothing
    ///
    /// Every id is resolved against the catalog before anything is written.
    /// If one id is unknown, nothing is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `book_ids` is empty.
    /// Returns [`AppError::NotFound`] with kind `book_not_found` for the first
    /// unknown id.
    /// Returns [`AppError::Internal`] if no receipt code can be generated or on
    /// repository errors.
    pub async fn purchase_books(
        &self,
        first_name: &str,
        last_name: &str,
        billing_address: &BillingAddress,
        book_ids: &[BookId],
    ) -> Result<Purchase, AppError> {
        if book_ids.is_empty() {
            return Err(AppError::bad_request(
                "At least one book must be purchased",
                json!({ "field": "book_ids" }),
            ));
        }

        let mut seen = HashSet::with_capacity(book_ids.len());
        let unique_ids: Vec<BookId> = book_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let mut total_cents: i64 = 0;
        for &book_id in &unique_ids {
            let book = self
                .catalog_repository
                .find_by_id(book_id)
                .await?
                .ok_or_else(|| book_not_found(book_id))?;

            total_cents = total_cents
                .checked_add(price_in_cents(book.price_usd))
                .ok_or_else(|| {
                    AppError::internal(
                        "Order total is out of range",
                        json!({ "book_id": book_id }),
                    )
                })?;
        }

        let receipt = self.generate_unique_receipt().await?;

        let new_purchase = NewPurchase {
            receipt,
            buyer: Buyer {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
                billing_address: billing_address.clone(),
            },
            book_ids: unique_ids,
            total_usd: total_cents as f64 / 100.0,
        };

        let purchase = self.purchase_repository.record(new_purchase).await?;

        tracing::info!(
            purchase_id = purchase.id,
            books = purchase.book_ids.len(),
            total_usd = purchase.total_usd,
            "Purchase recorded"
        );

        Ok(purchase)
    }

    /// Looks up a purchase by receipt code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn find_by_receipt(&self, receipt: &str) -> Result<Option<Purchase>, AppError> {
        self.purchase_repository.find_by_receipt(receipt).await
    }

    /// Returns purchase totals and per-book sales counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn sales_summary(&self) -> Result<SalesSummary, AppError> {
        self.purchase_repository.sales_summary().await
    }

    /// Generates a receipt code not yet used in the ledger.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_receipt(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let receipt = generate_receipt_code().map_err(|e| {
                AppError::internal(
                    "Failed to generate receipt code",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            if self
                .purchase_repository
                .find_by_receipt(&receipt)
                .await?
                .is_none()
            {
                return Ok(receipt);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique receipt code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Converts a price to whole cents. Out-of-range prices saturate.
fn price_in_cents(price_usd: f64) -> i64 {
    (price_usd * 100.0).round() as i64
}
