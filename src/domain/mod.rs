//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces, and checkout validation
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`checkout`] - Billing and card validators, checkout stages
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is orchestrated in services (see [`crate::application::services`])
//!
//! # Checkout Flow
//!
//! 1. HTTP handler receives a checkout request
//! 2. [`checkout::validate_billing_info`] rejects malformed buyer details
//! 3. [`checkout::validate_credit_card`] rejects malformed or expired cards
//! 4. The purchase is recorded via [`repositories::PurchaseRepository`]

pub mod checkout;
pub mod entities;
pub mod repositories;
