//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    CatalogService, CheckoutService, DownloadService, PurchaseService,
};
use crate::infrastructure::persistence::{InMemoryCatalogRepository, InMemoryPurchaseRepository};
use crate::infrastructure::storage::BookStorage;

pub type Catalog = InMemoryCatalogRepository;
pub type Ledger = InMemoryPurchaseRepository;

/// Services and settings shared by all request handlers.
///
/// Cheap to clone: every field is reference-counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<Catalog>>,
    pub purchase_service: Arc<PurchaseService<Catalog, Ledger>>,
    pub checkout_service: Arc<CheckoutService<Catalog, Ledger>>,
    pub download_service: Arc<DownloadService<Catalog, Ledger>>,
    pub storage: Arc<dyn BookStorage>,
    /// `max_count` used by the trending endpoint when the query omits it.
    pub trending_default_count: usize,
}

impl AppState {
    /// Wires services around a loaded catalog, a ledger and book storage.
    pub fn new(
        catalog: Arc<Catalog>,
        ledger: Arc<Ledger>,
        storage: Arc<dyn BookStorage>,
        trending_default_count: usize,
        download_requires_receipt: bool,
    ) -> Self {
        let catalog_service = Arc::new(CatalogService::new(catalog.clone()));
        let purchase_service = Arc::new(PurchaseService::new(catalog, ledger));
        let checkout_service = Arc::new(CheckoutService::new(purchase_service.clone()));
        let download_service = Arc::new(DownloadService::new(
            catalog_service.clone(),
            purchase_service.clone(),
            storage.clone(),
            download_requires_receipt,
        ));

        Self {
            catalog_service,
            purchase_service,
            checkout_service,
            download_service,
            storage,
            trending_default_count,
        }
    }
}
