//! In-memory implementation of the catalog repository.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{
    Book, BookId, Category, MAX_PRICE_USD, MAX_RATING, MIN_RATING, UnknownCategory,
};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate book id {0}")]
    DuplicateId(BookId),

    #[error("Book {book_id}: {source}")]
    UnknownCategory {
        book_id: BookId,
        source: UnknownCategory,
    },

    #[error("Book {0} has a blank name")]
    BlankName(BookId),

    #[error("Book {book_id} has invalid price {price}")]
    InvalidPrice { book_id: BookId, price: f64 },

    #[error("Book {book_id} has rating {rating} outside 0.0..=5.0")]
    InvalidRating { book_id: BookId, rating: f64 },

    #[error("Book {book_id} has unsafe file name {file_name:?}")]
    UnsafeFileName { book_id: BookId, file_name: String },
}

/// Catalog file layout: `{"books": [...]}`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<CatalogRecord>,
}

/// One book as written in the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: BookId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_file_name: String,
    price_usd: f64,
    topic: String,
    average_rating: f64,
    file_name: String,
}

impl CatalogRecord {
    fn into_book(self) -> Result<Book, CatalogLoadError> {
        let topic = self
            .topic
            .parse::<Category>()
            .map_err(|source| CatalogLoadError::UnknownCategory {
                book_id: self.id,
                source,
            })?;

        if self.name.trim().is_empty() {
            return Err(CatalogLoadError::BlankName(self.id));
        }

        if !(0.0..=MAX_PRICE_USD).contains(&self.price_usd) {
            return Err(CatalogLoadError::InvalidPrice {
                book_id: self.id,
                price: self.price_usd,
            });
        }

        if !(MIN_RATING..=MAX_RATING).contains(&self.average_rating) {
            return Err(CatalogLoadError::InvalidRating {
                book_id: self.id,
                rating: self.average_rating,
            });
        }

        if !is_safe_file_name(&self.file_name) {
            return Err(CatalogLoadError::UnsafeFileName {
                book_id: self.id,
                file_name: self.file_name,
            });
        }

        Ok(Book::new(
            self.id,
            self.name,
            self.description,
            self.image_file_name,
            self.price_usd,
            topic,
            self.average_rating,
            self.file_name,
        ))
    }
}

/// A plain file name: non-empty, no separators, no parent references.
fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
        && !name.starts_with('.')
}

/// Read-only catalog held in memory.
///
/// Built once at startup; every query works on the immutable book list, so
/// no locking is needed and results are stable across calls.
#[derive(Debug)]
pub struct InMemoryCatalogRepository {
    books: Vec<Book>,
    index: HashMap<BookId, usize>,
}

impl InMemoryCatalogRepository {
    /// Creates a catalog from already-built books.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::DuplicateId`] if two books share an id.
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogLoadError> {
        let mut index = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if index.insert(book.id, position).is_some() {
                return Err(CatalogLoadError::DuplicateId(book.id));
            }
        }

        Ok(Self { books, index })
    }

    /// Parses and validates a catalog from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError`] if the JSON is malformed or any record
    /// breaks a catalog invariant.
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let books = file
            .books
            .into_iter()
            .map(CatalogRecord::into_book)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(books)
    }

    /// Reads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Io`] if the file cannot be read, or any
    /// error from [`Self::from_json`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.clone())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, AppError> {
        Ok(self.index.get(&id).map(|&position| self.books[position].clone()))
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Book>, AppError> {
        Ok(self
            .books
            .iter()
            .filter(|book| book.topic == category)
            .cloned()
            .collect())
    }

    async fn trending(&self, limit: usize) -> Result<Vec<Book>, AppError> {
        let mut ranked: Vec<&Book> = self.books.iter().collect();
        // Stable sort keeps catalog order among equal scores.
        ranked.sort_by(|a, b| b.trending_score().total_cmp(&a.trending_score()));

        Ok(ranked.into_iter().take(limit).cloned().collect())
    }

    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(Category::ALL
            .into_iter()
            .filter(|category| self.books.iter().any(|book| book.topic == *category))
            .collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.books.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: BookId, topic: Category, rating: f64) -> Book {
        Book::new(
            id,
            format!("Book {id}"),
            String::new(),
            format!("{id}.png"),
            10.0,
            topic,
            rating,
            format!("{id}.pdf"),
        )
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = InMemoryCatalogRepository::new(vec![
            book(1, Category::Fiction, 4.0),
            book(1, Category::History, 3.0),
        ]);
        assert!(matches!(result, Err(CatalogLoadError::DuplicateId(1))));
    }

    #[test]
    fn test_from_json_valid() {
        let json = r#"{"books": [
            {"id": 1, "name": "Dune", "description": "Desert planet", "image_file_name": "dune.png",
             "price_usd": 9.99, "topic": "fiction", "average_rating": 4.7, "file_name": "dune.pdf"}
        ]}"#;

        let repo = InMemoryCatalogRepository::from_json(json).unwrap();
        assert_eq!(repo.books().len(), 1);
        assert_eq!(repo.books()[0].topic, Category::Fiction);
        assert_eq!(repo.books()[0].file_name, "dune.pdf");
    }

    #[test]
    fn test_from_json_unknown_topic() {
        let json = r#"{"books": [
            {"id": 1, "name": "Cookbook", "price_usd": 5.0, "topic": "cooking",
             "average_rating": 4.0, "file_name": "cook.pdf"}
        ]}"#;

        let err = InMemoryCatalogRepository::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::UnknownCategory { book_id: 1, .. }));
    }

    #[test]
    fn test_from_json_rating_out_of_range() {
        let json = r#"{"books": [
            {"id": 2, "name": "Hype", "price_usd": 5.0, "topic": "business",
             "average_rating": 5.5, "file_name": "hype.pdf"}
        ]}"#;

        let err = InMemoryCatalogRepository::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidRating { book_id: 2, .. }));
    }

    #[test]
    fn test_from_json_negative_price() {
        let json = r#"{"books": [
            {"id": 3, "name": "Refund", "price_usd": -1.0, "topic": "business",
             "average_rating": 1.0, "file_name": "refund.pdf"}
        ]}"#;

        let err = InMemoryCatalogRepository::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidPrice { book_id: 3, .. }));
    }

    #[test]
    fn test_from_json_price_above_limit() {
        let json = r#"{"books": [
            {"id": 5, "name": "Gold Edition", "price_usd": 1e17, "topic": "business",
             "average_rating": 4.0, "file_name": "gold.pdf"}
        ]}"#;

        let err = InMemoryCatalogRepository::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidPrice { book_id: 5, .. }));
    }

    #[test]
    fn test_from_json_price_at_limit() {
        let json = r#"{"books": [
            {"id": 6, "name": "Collector's Edition", "price_usd": 1000000.0, "topic": "history",
             "average_rating": 4.0, "file_name": "collector.pdf"}
        ]}"#;

        let repo = InMemoryCatalogRepository::from_json(json).unwrap();
        assert_eq!(repo.books()[0].price_usd, MAX_PRICE_USD);
    }

    #[test]
    fn test_from_json_blank_name() {
        let json = r#"{"books": [
            {"id": 4, "name": "  ", "price_usd": 1.0, "topic": "science",
             "average_rating": 1.0, "file_name": "blank.pdf"}
        ]}"#;

        let err = InMemoryCatalogRepository::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::BlankName(4)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = InMemoryCatalogRepository::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn test_safe_file_names() {
        assert!(is_safe_file_name("book.pdf"));
        assert!(is_safe_file_name("my book (2nd ed).epub"));
        assert!(!is_safe_file_name(""));
        assert!(!is_safe_file_name(".."));
        assert!(!is_safe_file_name("../secret.txt"));
        assert!(!is_safe_file_name("dir/book.pdf"));
        assert!(!is_safe_file_name("dir\\book.pdf"));
        assert!(!is_safe_file_name(".hidden"));
    }

    #[tokio::test]
    async fn test_trending_ties_keep_catalog_order() {
        let repo = InMemoryCatalogRepository::new(vec![
            book(1, Category::Education, 3.0),
            book(2, Category::Education, 4.8),
            book(3, Category::Education, 4.8),
        ])
        .unwrap();

        let ids: Vec<BookId> = repo.trending(2).await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_categories_are_distinct_and_ordered() {
        let repo = InMemoryCatalogRepository::new(vec![
            book(1, Category::Technology, 3.0),
            book(2, Category::Business, 4.0),
            book(3, Category::Technology, 2.0),
        ])
        .unwrap();

        assert_eq!(
            repo.categories().await.unwrap(),
            vec![Category::Business, Category::Technology]
        );
    }
}
