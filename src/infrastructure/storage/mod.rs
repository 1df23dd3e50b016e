//! Storage for downloadable book files.
//!
//! Provides a [`BookStorage`] trait with a directory-backed implementation,
//! [`LocalBookStorage`].

mod local_storage;
mod service;

pub use local_storage::LocalBookStorage;
pub use service::{BookStorage, StorageError, StorageResult};

#[cfg(test)]
pub use service::MockBookStorage;
