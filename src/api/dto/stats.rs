//! DTOs for sales statistics.

use serde::{Deserialize, Serialize};

use crate::domain::entities::BookId;
use crate::domain::repositories::SalesSummary;

/// Aggregated sales over the whole ledger.
#[derive(Debug, Serialize, Deserialize)]
pub struct SalesStatsResponse {
    pub total_purchases: u64,
    pub revenue_usd: f64,
    pub books: Vec<BookSalesDto>,
}

/// Copies sold for one book.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookSalesDto {
    pub book_id: BookId,
    pub copies_sold: u64,
}

impl From<SalesSummary> for SalesStatsResponse {
    fn from(summary: SalesSummary) -> Self {
        Self {
            total_purchases: summary.total_purchases,
            revenue_usd: summary.revenue_usd,
            books: summary
                .books
                .into_iter()
                .map(|b| BookSalesDto {
                    book_id: b.book_id,
                    copies_sold: b.copies_sold,
                })
                .collect(),
        }
    }
}
