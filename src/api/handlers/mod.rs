//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod checkout;
pub mod download;
pub mod health;
pub mod stats;

pub use books::{
    books_by_category_handler, categories_handler, list_books_handler, trending_books_handler,
};
pub use checkout::checkout_handler;
pub use download::download_handler;
pub use health::health_handler;
pub use stats::sales_stats_handler;
