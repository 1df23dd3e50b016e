//! Book entity held by the catalog.

use super::category::Category;

/// Identifier of a book in the catalog.
pub type BookId = i64;

/// Lowest allowed average rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest allowed average rating.
pub const MAX_RATING: f64 = 5.0;

/// Highest price a catalog entry may carry.
pub const MAX_PRICE_USD: f64 = 1_000_000.0;

/// A book offered by the store.
///
/// Books are created when the catalog is loaded and never change afterwards.
/// `file_name` names the downloadable file in the books directory and is not
/// part of the public listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub description: String,
    pub image_file_name: String,
    pub price_usd: f64,
    pub topic: Category,
    pub average_rating: f64,
    pub file_name: String,
}

impl Book {
    /// Creates a new Book instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        name: String,
        description: String,
        image_file_name: String,
        price_usd: f64,
        topic: Category,
        average_rating: f64,
        file_name: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image_file_name,
            price_usd,
            topic,
            average_rating,
            file_name,
        }
    }

    /// Score used to rank books on the trending list.
    pub fn trending_score(&self) -> f64 {
        self.average_rating
    }
}
