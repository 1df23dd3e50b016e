//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Catalog browsing and trending
//! - [`services::purchase_service::PurchaseService`] - Purchase recording and sales totals
//! - [`services::checkout_service::CheckoutService`] - Checkout validation pipeline
//! - [`services::download_service::DownloadService`] - Receipt-checked book downloads

pub mod services;
