//! Book files served from a local directory.

use super::service::{BookStorage, StorageError, StorageResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Storage backed by a directory on the local file system.
///
/// Only plain file names directly inside the root are served; anything with
/// a directory component is rejected before touching the disk.
#[derive(Debug, Clone)]
pub struct LocalBookStorage {
    root: PathBuf,
}

impl LocalBookStorage {
    /// Creates storage rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the files are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, file_name: &str) -> StorageResult<PathBuf> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(file_name)),
            _ => Err(StorageError::InvalidFileName(file_name.to_string())),
        }
    }
}

#[async_trait]
impl BookStorage for LocalBookStorage {
    async fn read(&self, file_name: &str) -> StorageResult<Vec<u8>> {
        let path = self.resolve(file_name)?;
        debug!(path = %path.display(), "Reading book file");

        tokio::fs::read(&path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StorageError::NotFound(file_name.to_string())
            } else {
                StorageError::Io {
                    file_name: file_name.to_string(),
                    source,
                }
            }
        })
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("book.pdf"), b"%PDF-1.7").unwrap();

        let storage = LocalBookStorage::new(dir.path());
        let bytes = storage.read("book.pdf").await.unwrap();

        assert_eq!(bytes, b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalBookStorage::new(dir.path());

        let result = storage.read("missing.pdf").await;

        assert!(matches!(result, Err(StorageError::NotFound(name)) if name == "missing.pdf"));
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalBookStorage::new(dir.path().join("books"));

        for name in ["../secret.txt", "nested/book.pdf", "/etc/passwd", ".."] {
            let result = storage.read(name).await;
            assert!(
                matches!(result, Err(StorageError::InvalidFileName(_))),
                "expected {name} to be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalBookStorage::new(dir.path()).health_check().await);
        assert!(!LocalBookStorage::new(dir.path().join("absent")).health_check().await);
    }
}
