//! DTOs for catalog browsing endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{Book, BookId, Category};

/// Public view of a book.
///
/// The storage file name is internal and never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: BookId,
    pub name: String,
    pub description: String,
    pub image_file_name: String,
    pub price_usd: f64,
    pub topic: String,
    pub average_rating: f64,
}

impl From<&Book> for BookDto {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            name: book.name.clone(),
            description: book.description.clone(),
            image_file_name: book.image_file_name.clone(),
            price_usd: book.price_usd,
            topic: book.topic.as_str().to_string(),
            average_rating: book.average_rating,
        }
    }
}

/// Envelope for every endpoint returning a list of books.
#[derive(Debug, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<BookDto>,
}

/// Wraps books in the `{"books": [...]}` envelope, preserving order.
pub fn aggregate_books(books: &[Book]) -> BooksResponse {
    BooksResponse {
        books: books.iter().map(BookDto::from).collect(),
    }
}

/// Supported categories, as lowercase tags.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

impl From<Vec<Category>> for CategoriesResponse {
    fn from(categories: Vec<Category>) -> Self {
        Self {
            categories: categories.iter().map(|c| c.as_str().to_string()).collect(),
        }
    }
}

/// Query parameters for the trending endpoint.
///
/// Uses `serde_with` so `max_count` parses from the query string; negative
/// or non-numeric values are rejected.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub max_count: Option<usize>,
}
