//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod books;
pub mod checkout;
pub mod download;
pub mod health;
pub mod stats;
