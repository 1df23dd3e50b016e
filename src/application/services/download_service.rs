//! Book download service.

use std::sync::Arc;

use crate::application::services::{CatalogService, PurchaseService};
use crate::domain::entities::BookId;
use crate::domain::repositories::{CatalogRepository, PurchaseRepository};
use crate::error::AppError;
use crate::infrastructure::storage::{BookStorage, StorageError};
use crate::utils::receipt_code::is_well_formed_receipt;
use serde_json::json;

/// File contents returned for a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Service serving purchased book files.
///
/// # Access Order
///
/// 1. The file name is resolved through [`CatalogService::get_book_file_name`].
///    Unknown ids fail before storage is touched.
/// 2. When receipts are required, the receipt must belong to a purchase that
///    contains the book.
/// 3. The file is read from [`BookStorage`].
pub struct DownloadService<C: CatalogRepository, P: PurchaseRepository> {
    catalog_service: Arc<CatalogService<C>>,
    purchase_service: Arc<PurchaseService<C, P>>,
    storage: Arc<dyn BookStorage>,
    requires_receipt: bool,
}

impl<C: CatalogRepository, P: PurchaseRepository> DownloadService<C, P> {
    /// Creates a new download service.
    pub fn new(
        catalog_service: Arc<CatalogService<C>>,
        purchase_service: Arc<PurchaseService<C, P>>,
        storage: Arc<dyn BookStorage>,
        requires_receipt: bool,
    ) -> Self {
        Self {
            catalog_service,
            purchase_service,
            storage,
            requires_receipt,
        }
    }

    /// Returns true if downloads must present a purchase receipt.
    pub fn requires_receipt(&self) -> bool {
        self.requires_receipt
    }

    /// Reads the file behind a book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with kind `book_not_found` if the book is
    /// not in the catalog, or if its file is missing from storage.
    /// Returns [`AppError::Forbidden`] if a receipt is required and missing,
    /// unknown, or does not cover this book.
    /// Returns [`AppError::Internal`] on other storage errors.
    pub async fn download(
        &self,
        book_id: BookId,
        receipt: Option<&str>,
    ) -> Result<BookFile, AppError> {
        let file_name = self.catalog_service.get_book_file_name(book_id).await?;

        if self.requires_receipt {
            self.check_receipt(book_id, receipt).await?;
        }

        let bytes = self.storage.read(&file_name).await.map_err(|e| match e {
            StorageError::NotFound(file_name) => AppError::not_found(
                "Book file not found",
                json!({ "book_id": book_id, "file_name": file_name }),
            ),
            other => {
                tracing::error!(book_id, error = %other, "Failed to read book file");
                AppError::internal(
                    "Failed to read book file",
                    json!({ "book_id": book_id }),
                )
            }
        })?;

        tracing::debug!(book_id, size = bytes.len(), "Book file served");

        Ok(BookFile { file_name, bytes })
    }

    async fn check_receipt(&self, book_id: BookId, receipt: Option<&str>) -> Result<(), AppError> {
        let receipt = receipt.map(str::trim).filter(|r| !r.is_empty()).ok_or_else(|| {
            AppError::forbidden(
                "A purchase receipt is required to download this book",
                json!({ "book_id": book_id }),
            )
        })?;

        let denied = || {
            AppError::forbidden(
                "Receipt does not cover this book",
                json!({ "book_id": book_id }),
            )
        };

        if !is_well_formed_receipt(receipt) {
            return Err(denied());
        }

        match self.purchase_service.find_by_receipt(receipt).await? {
            Some(purchase) if purchase.contains(book_id) => Ok(()),
            _ => Err(denied()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BillingAddress, Book, Buyer, Category, Purchase};
    use crate::domain::repositories::{MockCatalogRepository, MockPurchaseRepository};
    use crate::infrastructure::storage::MockBookStorage;
    use chrono::Utc;

    const RECEIPT: &str = "AbCdEfGhIjKlMn_-";

    fn catalog_with_book(id: BookId) -> MockCatalogRepository {
        let mut mock_repo = MockCatalogRepository::new();
        let book = Book::new(
            id,
            "Dune".to_string(),
            "Desert planet".to_string(),
            "dune.png".to_string(),
            9.99,
            Category::Fiction,
            4.8,
            "dune.epub".to_string(),
        );
        mock_repo
            .expect_find_by_id()
            .returning(move |requested| Ok((requested == id).then(|| book.clone())));
        mock_repo
    }

    fn create_service(
        catalog: MockCatalogRepository,
        purchases: MockPurchaseRepository,
        storage: MockBookStorage,
        requires_receipt: bool,
    ) -> DownloadService<MockCatalogRepository, MockPurchaseRepository> {
        let catalog = Arc::new(catalog);
        DownloadService::new(
            Arc::new(CatalogService::new(catalog.clone())),
            Arc::new(PurchaseService::new(catalog, Arc::new(purchases))),
            Arc::new(storage),
            requires_receipt,
        )
    }

    fn purchase_of(book_ids: Vec<BookId>) -> Purchase {
        Purchase {
            id: 1,
            receipt: RECEIPT.to_string(),
            buyer: Buyer {
                first_name: "Paul".to_string(),
                last_name: "Atreides".to_string(),
                billing_address: BillingAddress::default(),
            },
            book_ids,
            total_usd: 9.99,
            purchased_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_download_unknown_book_skips_storage() {
        let mut mock_storage = MockBookStorage::new();
        mock_storage.expect_read().times(0);
        let mut mock_purchase_repo = MockPurchaseRepository::new();
        mock_purchase_repo.expect_find_by_receipt().times(0);

        let service = create_service(catalog_with_book(1), mock_purchase_repo, mock_storage, true);

        let err = service.download(2, Some(RECEIPT)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.kind(), Some("book_not_found"));
    }

    #[tokio::test]
    async fn test_download_with_valid_receipt() {
        let mut mock_storage = MockBookStorage::new();
        mock_storage
            .expect_read()
            .withf(|name| name == "dune.epub")
            .times(1)
            .returning(|_| Ok(b"spice".to_vec()));
        let mut mock_purchase_repo = MockPurchaseRepository::new();
        mock_purchase_repo
            .expect_find_by_receipt()
            .times(1)
            .returning(|_| Ok(Some(purchase_of(vec![1]))));

        let service = create_service(catalog_with_book(1), mock_purchase_repo, mock_storage, true);

        let file = service.download(1, Some(RECEIPT)).await.unwrap();
        assert_eq!(file.file_name, "dune.epub");
        assert_eq!(file.bytes, b"spice");
    }

    #[tokio::test]
    async fn test_download_missing_receipt_is_forbidden() {
        let mut mock_storage = MockBookStorage::new();
        mock_storage.expect_read().times(0);

        let service = create_service(
            catalog_with_book(1),
            MockPurchaseRepository::new(),
            mock_storage,
            true,
        );

        let err = service.download(1, None).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_download_receipt_for_other_book_is_forbidden() {
        let mut mock_storage = MockBookStorage::new();
        mock_storage.expect_read().times(0);
        let mut mock_purchase_repo = MockPurchaseRepository::new();
        mock_purchase_repo
            .expect_find_by_receipt()
            .returning(|_| Ok(Some(purchase_of(vec![7]))));

        let service = create_service(catalog_with_book(1), mock_purchase_repo, mock_storage, true);

        let err = service.download(1, Some(RECEIPT)).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_download_open_mode_ignores_receipt() {
        let mut mock_storage = MockBookStorage::new();
        mock_storage
            .expect_read()
            .times(1)
            .returning(|_| Ok(vec![1, 2, 3]));
        let mut mock_purchase_repo = MockPurchaseRepository::new();
        mock_purchase_repo.expect_find_by_receipt().times(0);

        let service = create_service(catalog_with_book(1), mock_purchase_repo, mock_storage, false);

        assert!(service.download(1, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_download_missing_file() {
        let mut mock_storage = MockBookStorage::new();
        mock_storage
            .expect_read()
            .returning(|name| Err(StorageError::NotFound(name.to_string())));

        let service = create_service(
            catalog_with_book(1),
            MockPurchaseRepository::new(),
            mock_storage,
            false,
        );

        let err = service.download(1, None).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_download_io_error_is_internal() {
        let mut mock_storage = MockBookStorage::new();
        mock_storage.expect_read().returning(|name| {
            Err(StorageError::Io {
                file_name: name.to_string(),
                source: std::io::Error::other("disk on fire"),
            })
        });

        let service = create_service(
            catalog_with_book(1),
            MockPurchaseRepository::new(),
            mock_storage,
            false,
        );

        let err = service.download(1, None).await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
