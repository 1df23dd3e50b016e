//! Repository trait for the purchase ledger.

use crate::domain::entities::{BookId, NewPurchase, Purchase};
use crate::error::AppError;
use async_trait::async_trait;

/// Number of copies sold for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSales {
    pub book_id: BookId,
    pub copies_sold: u64,
}

/// Aggregated view over the ledger.
///
/// `books` is ordered by `book_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total_purchases: u64,
    pub revenue_usd: f64,
    pub books: Vec<BookSales>,
}

/// Repository interface for recording and querying purchases.
///
/// The ledger is append-only. Implementations must append a purchase and
/// update their sales aggregates atomically, so concurrent checkouts never
/// lose updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryPurchaseRepository`] - Mutex-guarded in-memory ledger
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_purchase.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Appends a purchase to the ledger.
    ///
    /// Assigns a sequential id and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record(&self, new_purchase: NewPurchase) -> Result<Purchase, AppError>;

    /// Finds a purchase by its receipt code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_receipt(&self, receipt: &str) -> Result<Option<Purchase>, AppError>;

    /// Returns purchase totals and per-book sales counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn sales_summary(&self) -> Result<SalesSummary, AppError>;
}
