//! Catalog browsing service.

use std::sync::Arc;

use crate::domain::entities::{Book, BookId, Category, UnknownCategory};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for browsing the book catalog.
///
/// Wraps the read-only catalog repository and maps lookup failures to
/// [`AppError`] with a `details.kind` the API surfaces to clients.
pub struct CatalogService<C: CatalogRepository> {
    catalog_repository: Arc<C>,
}

impl<C: CatalogRepository> CatalogService<C> {
    /// Creates a new catalog service.
    pub fn new(catalog_repository: Arc<C>) -> Self {
        Self { catalog_repository }
    }

    /// Returns every book in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn get_all_books(&self) -> Result<Vec<Book>, AppError> {
        self.catalog_repository.list().await
    }

    /// Returns the books filed under the category named by `tag`.
    ///
    /// The tag is matched case-insensitively after trimming. A supported
    /// category without any books yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with kind `unknown_category` if the tag
    /// names no supported category.
    pub async fn get_books_by_category(&self, tag: &str) -> Result<Vec<Book>, AppError> {
        let category = tag.parse::<Category>().map_err(|e: UnknownCategory| {
            let supported: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            AppError::bad_request(
                e.to_string(),
                json!({
                    "kind": "unknown_category",
                    "category": tag,
                    "supported": supported,
                }),
            )
        })?;

        self.catalog_repository.find_by_category(category).await
    }

    /// Returns the distinct categories present in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn get_all_supported_categories(&self) -> Result<Vec<Category>, AppError> {
        self.catalog_repository.categories().await
    }

    /// Returns at most `max_count` books ranked by average rating.
    ///
    /// Ties keep catalog order. A `max_count` of zero yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn get_trending_books(&self, max_count: usize) -> Result<Vec<Book>, AppError> {
        if max_count == 0 {
            return Ok(Vec::new());
        }

        self.catalog_repository.trending(max_count).await
    }

    /// Retrieves a single book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with kind `book_not_found` if no book has
    /// this id.
    pub async fn get_book(&self, book_id: BookId) -> Result<Book, AppError> {
        self.catalog_repository
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| book_not_found(book_id))
    }

    /// Returns the name of the downloadable file behind a book.
    ///
    /// # Errors
    ///
    /// See [`Self::get_book`].
    pub async fn get_book_file_name(&self, book_id: BookId) -> Result<String, AppError> {
        self.get_book(book_id).await.map(|book| book.file_name)
    }

    /// Counts the books in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.catalog_repository.count().await
    }
}

/// Builds the error returned when a book id is not in the catalog.
pub(crate) fn book_not_found(book_id: BookId) -> AppError {
    AppError::not_found(
        format!("Book {book_id} not found"),
        json!({ "kind": "book_not_found", "book_id": book_id }),
    )
}
