//! API route configuration.
//!
//! Browsing routes and checkout are split so checkout can carry a stricter
//! rate limit.

use crate::api::handlers::{
    books_by_category_handler, categories_handler, checkout_handler, download_handler,
    list_books_handler, sales_stats_handler, trending_books_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only catalog, download and statistics routes.
///
/// # Endpoints
///
/// - `GET /books`                      - List all books
/// - `GET /books/category/{category}`  - List books in a category
/// - `GET /books/trending`             - Highest-rated books
/// - `GET /books/{id}/download`        - Download a purchased book
/// - `GET /categories`                 - Categories present in the catalog
/// - `GET /stats/sales`                - Aggregated sales
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler))
        .route("/books/category/{category}", get(books_by_category_handler))
        .route("/books/trending", get(trending_books_handler))
        .route("/books/{id}/download", get(download_handler))
        .route("/categories", get(categories_handler))
        .route("/stats/sales", get(sales_stats_handler))
}

/// Purchase routes.
///
/// # Endpoints
///
/// - `POST /checkout` - Validate payment details and record a purchase
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout_handler))
}
