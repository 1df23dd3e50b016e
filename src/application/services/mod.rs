//! Business logic services for the application layer.

pub mod catalog_service;
pub mod checkout_service;
pub mod download_service;
pub mod purchase_service;

pub use catalog_service::CatalogService;
pub use checkout_service::CheckoutService;
pub use download_service::{BookFile, DownloadService};
pub use purchase_service::PurchaseService;
