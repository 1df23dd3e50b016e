//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data access and file storage.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory catalog and purchase ledger
//! - [`storage`] - Book file storage (local directory)

pub mod persistence;
pub mod storage;
