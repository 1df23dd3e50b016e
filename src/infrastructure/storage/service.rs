//! Book file storage trait and error types.

use async_trait::async_trait;

/// Errors that can occur while reading book files.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Book file not found: {0}")]
    NotFound(String),

    #[error("Rejected file name: {0}")]
    InvalidFileName(String),

    #[error("Failed to read book file {file_name}: {source}")]
    Io {
        file_name: String,
        source: std::io::Error,
    },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Read access to the files behind purchased books.
///
/// Files are addressed by the plain file name recorded in the catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::LocalBookStorage`] - Files in a local directory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStorage: Send + Sync {
    /// Reads the whole file into memory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no such file exists,
    /// [`StorageError::InvalidFileName`] if the name would escape the storage
    /// root, and [`StorageError::Io`] on other read failures.
    async fn read(&self, file_name: &str) -> StorageResult<Vec<u8>>;

    /// Checks if the storage backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
