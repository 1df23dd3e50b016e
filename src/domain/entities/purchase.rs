//! Purchase entity stored in the ledger.

use chrono::{DateTime, Utc};

use super::billing::BillingAddress;
use super::book::BookId;

/// Identity of the person who bought books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buyer {
    pub first_name: String,
    pub last_name: String,
    pub billing_address: BillingAddress,
}

impl Buyer {
    /// Full name as shown on receipts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A completed purchase.
///
/// Purchases are append-only: once recorded they are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: i64,
    pub receipt: String,
    pub buyer: Buyer,
    pub book_ids: Vec<BookId>,
    pub total_usd: f64,
    pub purchased_at: DateTime<Utc>,
}

impl Purchase {
    /// Returns true if the purchase includes the given book.
    pub fn contains(&self, book_id: BookId) -> bool {
        self.book_ids.contains(&book_id)
    }
}

/// Input data for recording a new purchase.
///
/// The id and timestamp are assigned by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchase {
    pub receipt: String,
    pub buyer: Buyer,
    pub book_ids: Vec<BookId>,
    pub total_usd: f64,
}
