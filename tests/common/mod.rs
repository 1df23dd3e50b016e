#![allow(dead_code)]

use bookstore::infrastructure::persistence::{
    InMemoryCatalogRepository, InMemoryPurchaseRepository,
};
use bookstore::infrastructure::storage::LocalBookStorage;
use bookstore::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;

pub const TRENDING_DEFAULT_COUNT: usize = 3;

/// Five books across three categories; `history` and `business` are empty.
pub const CATALOG_JSON: &str = r#"{
  "books": [
    {"id": 1, "name": "The Pragmatic Programmer", "description": "Journey to mastery",
     "image_file_name": "pragmatic.jpg", "price_usd": 39.99, "topic": "technology",
     "average_rating": 4.6, "file_name": "pragmatic.pdf"},
    {"id": 2, "name": "Dune", "description": "Desert planet",
     "image_file_name": "dune.jpg", "price_usd": 9.99, "topic": "fiction",
     "average_rating": 4.8, "file_name": "dune.epub"},
    {"id": 3, "name": "A Brief History of Time", "description": "Cosmology for everyone",
     "image_file_name": "brief-history.jpg", "price_usd": 18.5, "topic": "science",
     "average_rating": 4.6, "file_name": "brief-history.pdf"},
    {"id": 4, "name": "Neuromancer", "description": "Cyberpunk classic",
     "image_file_name": "neuromancer.jpg", "price_usd": 12.0, "topic": "fiction",
     "average_rating": 4.1, "file_name": "neuromancer.epub"},
    {"id": 5, "name": "Rust in Action", "description": "Systems programming",
     "image_file_name": "rust-in-action.jpg", "price_usd": 44.99, "topic": "technology",
     "average_rating": 4.4, "file_name": "missing-on-disk.pdf"}
  ]
}"#;

/// State plus the temporary books directory it reads from.
///
/// The directory is removed when this value is dropped, so keep it alive for
/// the whole test.
pub struct TestContext {
    pub state: AppState,
    pub books_dir: TempDir,
}

pub fn create_test_state(download_requires_receipt: bool) -> TestContext {
    let catalog = InMemoryCatalogRepository::from_json(CATALOG_JSON).unwrap();

    let books_dir = tempfile::tempdir().unwrap();
    for (file_name, contents) in [
        ("pragmatic.pdf", b"%PDF-pragmatic".as_slice()),
        ("dune.epub", b"spice must flow".as_slice()),
        ("brief-history.pdf", b"%PDF-cosmos".as_slice()),
        ("neuromancer.epub", b"cyberspace".as_slice()),
    ] {
        std::fs::write(books_dir.path().join(file_name), contents).unwrap();
    }

    let state = AppState::new(
        Arc::new(catalog),
        Arc::new(InMemoryPurchaseRepository::new()),
        Arc::new(LocalBookStorage::new(books_dir.path())),
        TRENDING_DEFAULT_COUNT,
        download_requires_receipt,
    );

    TestContext { state, books_dir }
}

pub fn valid_checkout_body(book_ids: &[i64]) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "billing_address": {
            "street": "12 St James's Square",
            "city": "London",
            "postal_code": "SW1Y 4JH",
            "country": "GB"
        },
        "credit_card": {
            "number": "4111 1111 1111 1111",
            "expiration": "12/2099",
            "security_code": "123"
        },
        "book_ids": book_ids
    })
}
