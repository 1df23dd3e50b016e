//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits. The catalog is
//! loaded once from a JSON file; the purchase ledger lives for the lifetime
//! of the process.
//!
//! # Repositories
//!
//! - [`InMemoryCatalogRepository`] - Immutable book catalog and its queries
//! - [`InMemoryPurchaseRepository`] - Mutex-guarded purchase ledger

pub mod in_memory_catalog_repository;
pub mod in_memory_purchase_repository;

pub use in_memory_catalog_repository::{CatalogLoadError, InMemoryCatalogRepository};
pub use in_memory_purchase_repository::InMemoryPurchaseRepository;
