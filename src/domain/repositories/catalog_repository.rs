//! Repository trait for read access to the book catalog.

use crate::domain::entities::{Book, BookId, Category};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the book catalog.
///
/// The catalog is read-only once loaded; every query returns books in
/// catalog (insertion) order unless stated otherwise, so repeated calls
/// with the same arguments yield identical results.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCatalogRepository`] - In-memory catalog loaded from JSON
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_catalog.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists every book in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Finds a book by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Book))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, AppError>;

    /// Lists books filed under `category`, in catalog order.
    ///
    /// An empty vector means no book has that category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_category(&self, category: Category) -> Result<Vec<Book>, AppError>;

    /// Returns at most `limit` books ranked by trending score, highest first.
    ///
    /// Books with equal scores keep their catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn trending(&self, limit: usize) -> Result<Vec<Book>, AppError>;

    /// Lists the distinct categories present in the catalog.
    ///
    /// Ordered as in [`Category::ALL`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn categories(&self) -> Result<Vec<Category>, AppError>;

    /// Counts the books in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<usize, AppError>;
}
