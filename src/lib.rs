//! # Bookstore
//!
//! Catalog and checkout backend for a digital bookstore, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, checkout validators, repository traits
//! - **Application Layer** ([`application`]) - Catalog, purchase, checkout and download services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory catalog and ledger, book file storage
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Catalog browsing by category and by rating
//! - Checkout with billing and card validation, recorded in an append-only ledger
//! - Receipt-protected book downloads
//! - Sales statistics
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export CATALOG_PATH="resources/catalog.json"
//! export BOOKS_DIR="resources/books"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CatalogService, CheckoutService, DownloadService, PurchaseService,
    };
    pub use crate::domain::entities::{
        BillingAddress, BillingInfo, Book, BookId, Category, CreditCard, Purchase,
    };
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{
        InMemoryCatalogRepository, InMemoryPurchaseRepository,
    };
    pub use crate::infrastructure::storage::LocalBookStorage;
    pub use crate::state::AppState;
}
