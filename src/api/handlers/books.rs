//! Handlers for catalog browsing endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::books::{BooksResponse, CategoriesResponse, TrendingQuery, aggregate_books};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every book in the catalog.
///
/// # Endpoint
///
/// `GET /api/books`
///
/// # Response
///
/// ```json
/// {
///   "books": [
///     {
///       "id": 1,
///       "name": "The Rust Programming Language",
///       "description": "...",
///       "image_file_name": "rust-book.jpg",
///       "price_usd": 39.95,
///       "topic": "technology",
///       "average_rating": 4.7
///     }
///   ]
/// }
/// ```
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<BooksResponse>, AppError> {
    let books = state.catalog_service.get_all_books().await?;

    Ok(Json(aggregate_books(&books)))
}

/// Lists the books filed under a category.
///
/// # Endpoint
///
/// `GET /api/books/category/{category}`
///
/// The tag is case-insensitive. A supported category without books returns
/// an empty list.
///
/// # Errors
///
/// Returns 400 Bad Request (`details.kind = "unknown_category"`) if the tag
/// is not a supported category.
pub async fn books_by_category_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<BooksResponse>, AppError> {
    let books = state.catalog_service.get_books_by_category(&category).await?;

    Ok(Json(aggregate_books(&books)))
}

/// Lists the highest-rated books.
///
/// # Endpoint
///
/// `GET /api/books/trending?max_count=N`
///
/// # Query Parameters
///
/// - `max_count` (optional): Maximum number of books, defaults to
///   `TRENDING_DEFAULT_COUNT`
///
/// # Errors
///
/// Returns 400 Bad Request if `max_count` is negative or not a number.
pub async fn trending_books_handler(
    State(state): State<AppState>,
    query: Result<Query<TrendingQuery>, QueryRejection>,
) -> Result<Json<BooksResponse>, AppError> {
    let Query(query) = query.map_err(|e| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "field": "max_count", "reason": e.body_text() }),
        )
    })?;

    let max_count = query.max_count.unwrap_or(state.trending_default_count);
    let books = state.catalog_service.get_trending_books(max_count).await?;

    Ok(Json(aggregate_books(&books)))
}

/// Lists the categories present in the catalog.
///
/// # Endpoint
///
/// `GET /api/categories`
///
/// # Response
///
/// ```json
/// { "categories": ["education", "fiction", "technology"] }
/// ```
pub async fn categories_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.catalog_service.get_all_supported_categories().await?;

    Ok(Json(CategoriesResponse::from(categories)))
}
