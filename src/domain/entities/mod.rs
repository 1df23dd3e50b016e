//! Core domain entities representing the bookstore data model.
//!
//! Entities are plain data structures; serialization lives in the API DTOs
//! and in the catalog loader.
//!
//! # Entity Types
//!
//! - [`Book`] - A catalog entry, immutable after load
//! - [`Category`] - The closed set of supported topics
//! - [`BillingInfo`] / [`BillingAddress`] - Buyer details submitted at checkout
//! - [`CreditCard`] - Card details, validated but never stored
//! - [`Purchase`] - A recorded checkout in the ledger
//!
//! Creation inputs use a separate `New*` struct, e.g. [`NewPurchase`].

pub mod billing;
pub mod book;
pub mod category;
pub mod credit_card;
pub mod purchase;

pub use billing::{BillingAddress, BillingInfo};
pub use book::{Book, BookId, MAX_PRICE_USD, MAX_RATING, MIN_RATING};
pub use category::{Category, UnknownCategory};
pub use credit_card::CreditCard;
pub use purchase::{Buyer, NewPurchase, Purchase};
