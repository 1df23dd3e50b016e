//! In-memory implementation of the purchase ledger.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::{BookId, NewPurchase, Purchase};
use crate::domain::repositories::{BookSales, PurchaseRepository, SalesSummary};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Ledger {
    purchases: Vec<Purchase>,
    by_receipt: HashMap<String, usize>,
    copies_sold: BTreeMap<BookId, u64>,
    revenue_usd: f64,
}

/// Append-only purchase ledger held in memory.
///
/// A single mutex guards the purchase list together with the receipt index
/// and the sales aggregates, so appending a purchase and updating the
/// aggregates is one atomic step.
#[derive(Debug, Default)]
pub struct InMemoryPurchaseRepository {
    ledger: Mutex<Ledger>,
}

impl InMemoryPurchaseRepository {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every purchase in recording order.
    ///
    /// Not part of [`PurchaseRepository`]: no request path reads the whole
    /// ledger.
    pub fn purchases(&self) -> Vec<Purchase> {
        self.ledger.lock().purchases.clone()
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchaseRepository {
    async fn record(&self, new_purchase: NewPurchase) -> Result<Purchase, AppError> {
        let mut ledger = self.ledger.lock();

        if ledger.by_receipt.contains_key(&new_purchase.receipt) {
            return Err(AppError::internal(
                "Receipt code collision",
                serde_json::json!({}),
            ));
        }

        let purchase = Purchase {
            id: ledger.purchases.len() as i64 + 1,
            receipt: new_purchase.receipt,
            buyer: new_purchase.buyer,
            book_ids: new_purchase.book_ids,
            total_usd: new_purchase.total_usd,
            purchased_at: Utc::now(),
        };

        for &book_id in &purchase.book_ids {
            *ledger.copies_sold.entry(book_id).or_insert(0) += 1;
        }
        ledger.revenue_usd += purchase.total_usd;

        let position = ledger.purchases.len();
        ledger.by_receipt.insert(purchase.receipt.clone(), position);
        ledger.purchases.push(purchase.clone());

        Ok(purchase)
    }

    async fn find_by_receipt(&self, receipt: &str) -> Result<Option<Purchase>, AppError> {
        let ledger = self.ledger.lock();
        Ok(ledger
            .by_receipt
            .get(receipt)
            .map(|&position| ledger.purchases[position].clone()))
    }

    async fn sales_summary(&self) -> Result<SalesSummary, AppError> {
        let ledger = self.ledger.lock();
        Ok(SalesSummary {
            total_purchases: ledger.purchases.len() as u64,
            revenue_usd: (ledger.revenue_usd * 100.0).round() / 100.0,
            books: ledger
                .copies_sold
                .iter()
                .map(|(&book_id, &copies_sold)| BookSales {
                    book_id,
                    copies_sold,
                })
                .collect(),
        })
    }
}
