//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CatalogRepository`] - Read-only book catalog queries
//! - [`PurchaseRepository`] - Append-only purchase ledger and sales aggregates

pub mod catalog_repository;
pub mod purchase_repository;

pub use catalog_repository::CatalogRepository;
pub use purchase_repository::{BookSales, PurchaseRepository, SalesSummary};

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use purchase_repository::MockPurchaseRepository;
