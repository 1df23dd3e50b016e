//! Checkout progress tracking.

use std::fmt;

/// Stage a checkout call has reached.
///
/// ```text
/// Received -> BillingValidated -> CardValidated -> BooksPurchased
///     \              \                  \
///      +--------------+------------------+--> Rejected
/// ```
///
/// `BooksPurchased` and `Rejected` are terminal. Stages are not persisted;
/// each checkout runs synchronously to one of the terminal stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    Received,
    BillingValidated,
    CardValidated,
    BooksPurchased,
    Rejected,
}

impl CheckoutStage {
    /// Stage reached when the current step succeeds.
    ///
    /// Terminal stages have no successor.
    pub fn advance(self) -> Option<CheckoutStage> {
        match self {
            CheckoutStage::Received => Some(CheckoutStage::BillingValidated),
            CheckoutStage::BillingValidated => Some(CheckoutStage::CardValidated),
            CheckoutStage::CardValidated => Some(CheckoutStage::BooksPurchased),
            CheckoutStage::BooksPurchased | CheckoutStage::Rejected => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, CheckoutStage::BooksPurchased | CheckoutStage::Rejected)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutStage::Received => "received",
            CheckoutStage::BillingValidated => "billing_validated",
            CheckoutStage::CardValidated => "card_validated",
            CheckoutStage::BooksPurchased => "books_purchased",
            CheckoutStage::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
